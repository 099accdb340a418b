//! Banner page operations

use super::AdminConsole;
use crate::core::error::ConsoleError;
use crate::core::notify::NotifyKind;
use crate::core::reorder::{Direction, renumber, sort_by_position};
use crate::core::store::EntityStore;
use crate::entities::banner::move_banner;
use crate::entities::{Banner, BannerDraft};
use uuid::Uuid;

impl AdminConsole {
    /// Register a banner at the end of the carousel
    pub fn register_banner(&mut self, draft: BannerDraft) -> Result<Banner, ConsoleError> {
        let result = self.try_register_banner(draft);
        self.settle_outcome(result, |_| "배너가 등록되었습니다.".to_string())
    }

    fn try_register_banner(&mut self, draft: BannerDraft) -> Result<Banner, ConsoleError> {
        draft.check()?;
        let banner = Banner {
            id: Uuid::new_v4().to_string(),
            order: self.banners.len() as u32 + 1,
            title: draft.title,
            image_url: draft.image_url,
            link_url: draft.link_url,
            start_date: draft.start_date,
            end_date: draft.end_date,
            created_at: self.today(),
            status: draft.status,
        };
        let banner = self.banners.insert(banner)?;
        tracing::info!(id = %banner.id, order = banner.order, "banner registered");
        Ok(banner)
    }

    /// Edit a banner's content; its position is unchanged
    pub fn edit_banner(&mut self, id: &str, draft: BannerDraft) -> Result<Banner, ConsoleError> {
        let result = draft.check().and_then(|()| {
            self.banners.modify(id, |banner| {
                banner.apply_draft(draft);
                Ok(())
            })
        });
        if let Ok(banner) = &result {
            tracing::info!(id = %banner.id, "banner edited");
        }
        self.settle_outcome(result, |_| "배너가 수정되었습니다.".to_string())
    }

    /// Delete a banner and close the gap in the carousel order
    pub fn delete_banner(&mut self, id: &str) -> Result<Banner, ConsoleError> {
        let result = self.try_delete_banner(id);
        self.settle_outcome(result, |_| "배너가 삭제되었습니다.".to_string())
    }

    fn try_delete_banner(&mut self, id: &str) -> Result<Banner, ConsoleError> {
        let removed = self.banners.remove(id)?;
        let mut remaining = self.banners.list();
        renumber(&mut remaining);
        self.banners.replace_all(remaining)?;
        tracing::info!(id = %removed.id, order = removed.order, "banner deleted");
        Ok(removed)
    }

    /// Move a banner one step and return the banners in carousel order
    ///
    /// Moving the first banner up, the last one down, or an unknown id is a
    /// no-op and signals nothing.
    pub fn move_banner(
        &mut self,
        id: &str,
        direction: Direction,
    ) -> Result<Vec<Banner>, ConsoleError> {
        let before = self.banners.list();
        let after = move_banner(before.clone(), id, direction);

        let moved = after
            .iter()
            .any(|b| before.iter().any(|o| o.id == b.id && o.order != b.order));
        if !moved {
            tracing::debug!(id, ?direction, "banner move was a no-op");
            return Ok(after);
        }

        self.banners.replace_all(after.clone())?;
        tracing::info!(id, ?direction, "banner moved");
        self.notify("순서가 변경되었습니다.", NotifyKind::Success);
        Ok(after)
    }

    /// Banners in carousel order
    pub fn banners_in_order(&self) -> Vec<Banner> {
        let mut banners = self.banners.list();
        sort_by_position(&mut banners);
        banners
    }
}
