//! End-to-end console flows over the fixture seed

mod common;

use chrono::NaiveDate;
use common::*;
use market_admin::core::field::FieldFormat;
use market_admin::core::stats;
use market_admin::prelude::*;

// ============================================================================
// List pages
// ============================================================================

#[test]
fn test_customer_list_filters() {
    let (console, _) = fixture_console();
    let mut filter = StagedFilter::<CustomerFilter>::new();

    filter.draft_mut().query = "BREAD".to_string();
    assert!(filter.is_dirty());
    assert_eq!(ids(&console.evaluate(&filter)).len(), 3);

    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["c1"]);

    filter.reset();
    filter.draft_mut().phone = "3333".to_string();
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["c2"]);

    filter.reset();
    filter.draft_mut().status = Choice::Only(CustomerStatus::Withdrawn);
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["c3"]);
}

#[test]
fn test_operating_store_list_only_shows_approved() {
    let (console, _) = fixture_console();
    let mut filter = StagedFilter::<StoreFilter>::new();
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["s1", "s3"]);

    filter.draft_mut().region = Choice::Only("마포구".to_string());
    filter.draft_mut().name = "Salad".to_string();
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["s3"]);
}

#[test]
fn test_store_settings_cards() {
    let (console, _) = fixture_console();
    let counts = console.status_counts::<Store>();
    assert_eq!(counts.get(StoreStatus::Draft), 0);
    assert_eq!(counts.get(StoreStatus::UnderReview), 1);
    assert_eq!(counts.get(StoreStatus::Approved), 2);
    assert_eq!(counts.get(StoreStatus::TemporarilyClosed), 1);
    assert_eq!(counts.total(), 4);

    let cards = counts.cards();
    assert_eq!(cards[0].label, "전체");
    assert_eq!(cards[0].selection, None);

    let mut filter = StagedFilter::<StoreSettingsFilter>::new();
    filter.draft_mut().status = cards
        .iter()
        .find(|c| c.label == "심사중")
        .and_then(|c| c.selection);
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["s2"]);
}

#[test]
fn test_order_filters_compose() {
    let (console, _) = fixture_console();
    let mut filter = StagedFilter::<OrderFilter>::new();

    filter.draft_mut().customer_phone = "1111".to_string();
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["o1", "o2"]);

    filter.draft_mut().status = Choice::Only(OrderStatus::PickedUp);
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["o1"]);

    filter.reset();
    filter.draft_mut().ordered_from = NaiveDate::from_ymd_opt(2024, 5, 11);
    filter.draft_mut().ordered_to = NaiveDate::from_ymd_opt(2024, 5, 12);
    filter.apply();
    assert_eq!(ids(&console.evaluate(&filter)), vec!["o2", "o3"]);
}

#[test]
fn test_banner_list_is_sorted_by_order_after_moves() {
    let (mut console, recorder) = fixture_console();
    console.move_banner("b3", Direction::Up).unwrap();
    assert_eq!(recorder.last().unwrap().message, "순서가 변경되었습니다.");

    let all = StagedFilter::<BannerFilter>::new();
    assert_eq!(ids(&console.evaluate(&all)), vec!["b1", "b3", "b2"]);

    let mut live = StagedFilter::<BannerFilter>::new();
    live.draft_mut().status = Choice::Only(BannerStatus::Live);
    live.apply();
    assert_eq!(ids(&console.evaluate(&live)), vec!["b1", "b2"]);
}

#[test]
fn test_page_of_reports() {
    let (console, _) = fixture_console();
    let filter = StagedFilter::<ReportFilter>::new();
    let page = console.page(&filter, 1);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total, 2);
    assert_eq!(page.pagination.limit, 10);
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_customer_detail_stats() {
    let (console, _) = fixture_console();
    let stats = console.customer_stats("c1").unwrap();
    assert_eq!(stats.total_spent, 15500);
    assert_eq!(stats.order_count, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.cancelled, 1);
    assert_eq!(stats.manner_band, MannerBand::Excellent);
    assert_eq!(ids(&stats.related_reports), vec!["rp2"]);
}

#[test]
fn test_store_detail_stats() {
    let (console, _) = fixture_console();
    let stats = console.store_stats("s1").unwrap();
    assert_eq!(stats.total_sales, 15500);
    assert_eq!(stats.average_rating, Some(4.5));
    assert_eq!(stats.settlement_total, 810_000);
    assert_eq!(stats.pending_settlements, 1);

    let empty = console.store_stats("s2").unwrap();
    assert_eq!(stats::display_or_dash(empty.average_rating), "-");
}

#[test]
fn test_dashboard_for_fixture_day() {
    let (console, _) = fixture_console();
    let dashboard = console.dashboard();
    assert_eq!(ids(&dashboard.stores_under_review), vec!["s2"]);
    assert_eq!(dashboard.pending_reports, 1);
    assert_eq!(dashboard.today_orders, 1);
    assert_eq!(dashboard.today_reviews, 1);
    assert_eq!(dashboard.recent_reports.len(), 2);
}

#[test]
fn test_push_page() {
    let (mut console, _) = fixture_console();
    let summary = console.push_summary();
    assert_eq!(summary.sent_count, 1);
    assert_eq!(summary.scheduled_count, 1);
    assert_eq!(summary.total_delivered, 285);
    assert_eq!(stats::display_percent(summary.average_success_rate), "95.0%");

    let push = console
        .schedule_push(PushRequest {
            title: "VIP 전용 혜택".to_string(),
            message: "오늘만 드려요".to_string(),
            target_type: PushTarget::Cohort,
            target_detail: Some("VIP".to_string()),
            scheduled_at: fixture_now(),
        })
        .unwrap();
    assert_eq!(push.target_count, 25);
    assert_eq!(console.list::<PushNotification>()[0].id, push.id);
    assert_eq!(console.push_summary().scheduled_count, 2);
}

// ============================================================================
// Mutations
// ============================================================================

#[test]
fn test_coupon_lifecycle() {
    let (mut console, recorder) = fixture_console();
    let issued = console
        .issue_coupon(CouponRequest {
            name: "사과 쿠폰".to_string(),
            discount: 5000,
            customer_name: "박샐러드".to_string(),
            customer_phone: "01033334444".to_string(),
            expires_at: None,
        })
        .unwrap();
    assert!(FieldFormat::CouponCode.validate(&issued.code));
    assert_eq!(issued.issued_at, fixture_today());
    assert_eq!(issued.expires_at, NaiveDate::from_ymd_opt(2024, 6, 11).unwrap());
    assert_eq!(console.list::<Coupon>()[0].id, issued.id);
    assert_eq!(
        recorder.last().unwrap().message,
        "박샐러드님에게 쿠폰이 발급되었습니다."
    );

    let extended = console.extend_coupon("cp1", None).unwrap();
    assert_eq!(extended.expires_at, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());

    console.mark_coupon_used(&issued.id).unwrap();
    assert!(console.extend_coupon(&issued.id, None).is_err());
    assert!(console.delete_coupon(&issued.id).is_err());

    let summary = console.coupon_summary();
    assert_eq!(summary.available, 1);
    assert_eq!(summary.used, 2);
    assert_eq!(summary.total_discount, 7000);
}

#[test]
fn test_bulk_settlement() {
    let (mut console, recorder) = fixture_console();
    let selection = strings(&["st1", "st2"]);
    let summary = console.settlement_selection(&selection);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_amount, 770_000);

    console.settle_batch(&selection).unwrap();
    assert_eq!(
        recorder.last().unwrap().message,
        "2건 (770000원) 일괄 정산 처리"
    );
    assert_eq!(
        console.status_counts::<Settlement>().get(SettlementStatus::Settled),
        3
    );

    assert!(console.settle_batch(&[]).is_err());
    assert_eq!(recorder.last().unwrap().kind, NotifyKind::Failure);
}

#[test]
fn test_order_cancellation() {
    let (mut console, recorder) = fixture_console();
    let partial = console
        .cancel_order_items("o3", &strings(&["o3-2"]))
        .unwrap();
    assert_eq!(partial.total_amount, 8900);
    assert_eq!(partial.status, OrderStatus::Reserved);
    assert_eq!(recorder.last().unwrap().message, "부분 취소가 완료되었습니다.");

    let full = console.cancel_order("o3").unwrap();
    assert_eq!(full.status, OrderStatus::CancelledByAdmin);
    assert_eq!(recorder.last().unwrap().message, "전체 취소가 완료되었습니다.");

    assert!(console.cancel_order("o2").is_err());
}

#[test]
fn test_moderation_flows() {
    let (mut console, _) = fixture_console();
    console.moderate_review("rv1", ReviewStatus::Hidden).unwrap();
    assert_eq!(
        console.status_counts::<Review>().get(ReviewStatus::Hidden),
        2
    );

    let report = console.advance_report("rp1").unwrap();
    assert_eq!(report.status, ReportStatus::InProgress);
    assert_eq!(console.dashboard().pending_reports, 0);
}

#[test]
fn test_export_survives_json_round_trip() {
    let (mut console, _) = fixture_console();
    console.move_banner("b1", Direction::Down).unwrap();

    let exported = console.export();
    let json = exported.to_json_string().unwrap();
    let restored = SeedData::from_json_str(&json).unwrap();
    assert_eq!(restored, exported);
    assert_eq!(restored.record_count(), fixture_seed().record_count());
}
