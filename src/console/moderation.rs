//! Review and report moderation

use super::AdminConsole;
use crate::core::entity::{ClosedEnum, Entity};
use crate::core::error::ConsoleError;
use crate::core::store::EntityStore;
use crate::entities::{Report, ReportStatus, Review, ReviewStatus};

impl AdminConsole {
    /// Hide, unhide or delete a review
    pub fn moderate_review(
        &mut self,
        id: &str,
        status: ReviewStatus,
    ) -> Result<Review, ConsoleError> {
        let result = self.reviews.modify(id, |review| review.moderate(status));
        if let Ok(review) = &result {
            tracing::info!(id = %review.id, to = status.as_str(), "review moderated");
        }
        self.settle_outcome(result, |r| {
            format!("리뷰 상태가 '{}'(으)로 변경되었습니다.", r.status)
        })
    }

    /// Move a report to `status`, which must be its next lifecycle step
    pub fn transition_report(
        &mut self,
        id: &str,
        status: ReportStatus,
    ) -> Result<Report, ConsoleError> {
        let result = self.reports.modify(id, |report| report.transition(status));
        if let Ok(report) = &result {
            tracing::info!(id = %report.id, to = status.as_str(), "report status changed");
        }
        self.settle_outcome(result, |r| {
            format!("신고 상태가 '{}'(으)로 변경되었습니다.", r.status)
        })
    }

    /// Move a report one step along `접수 → 처리중 → 블랙 → 해제`
    pub fn advance_report(&mut self, id: &str) -> Result<Report, ConsoleError> {
        let Some(report) = self.reports.get(id) else {
            let err = ConsoleError::not_found(Report::resource_name_singular(), id);
            return self.settle_outcome(Err(err), |_| String::new());
        };
        match report.status.next() {
            Some(next) => self.transition_report(id, next),
            None => {
                let err = ConsoleError::InvalidTransition {
                    entity_type: Report::resource_name_singular(),
                    id: report.id,
                    from: report.status.to_string(),
                    to: "-".to_string(),
                };
                self.settle_outcome(Err(err), |_| String::new())
            }
        }
    }

    /// Lift a blacklist (`블랙 → 해제`)
    pub fn release_report(&mut self, id: &str) -> Result<Report, ConsoleError> {
        let result = self
            .reports
            .modify(id, |report| report.transition(ReportStatus::Released));
        if let Ok(report) = &result {
            tracing::info!(id = %report.id, "blacklist released");
        }
        self.settle_outcome(result, |_| "블랙리스트가 해제되었습니다.".to_string())
    }
}
