//! Paginated list view state

use tabula_client::{Record, Resource};

use super::LoadStatus;
use crate::error::CoreResult;
use crate::types::{PageResult, paginate};

/// Handle for one list fetch.
///
/// Pass it back to [`ListView::apply`] together with the fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    page: usize,
}

impl RequestTicket {
    /// Page the fetch was issued for.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// State of a paginated collection view (users, posts).
#[derive(Debug, Clone)]
pub struct ListView {
    resource: Resource,
    status: LoadStatus,
    page: PageResult<Record>,
    requested_page: usize,
    page_size: usize,
    generation: u64,
    mounted: bool,
    cursor: usize,
    selected: Option<Record>,
}

impl ListView {
    pub fn new(resource: Resource, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            resource,
            status: LoadStatus::Idle,
            page: PageResult::empty(1, page_size),
            requested_page: 1,
            page_size,
            generation: 0,
            mounted: false,
            cursor: 0,
            selected: None,
        }
    }

    // ========== Lifecycle ==========

    /// Mark the view live and start loading the current page.
    pub fn mount(&mut self) -> RequestTicket {
        self.mounted = true;
        self.begin(self.requested_page)
    }

    /// Detach the view. In-flight results are discarded from here on.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        self.selected = None;
        if self.status.is_loading() {
            self.status = LoadStatus::Idle;
        }
    }

    /// Request page `n`.
    ///
    /// `n` is clamped to `>= 1`, and to `total_pages` once a page count is
    /// known. Returns `None` when unmounted or when `n` is already the
    /// page being shown or loaded.
    pub fn change_page(&mut self, n: usize) -> Option<RequestTicket> {
        if !self.mounted {
            return None;
        }

        let mut target = n.max(1);
        if self.page.total_pages > 0 {
            target = target.min(self.page.total_pages);
        }

        let settled = self.status.is_loaded() || self.status.is_loading();
        if target == self.requested_page && settled {
            return None;
        }
        Some(self.begin(target))
    }

    pub fn next_page(&mut self) -> Option<RequestTicket> {
        self.change_page(self.requested_page + 1)
    }

    pub fn previous_page(&mut self) -> Option<RequestTicket> {
        self.change_page(self.requested_page.saturating_sub(1))
    }

    /// Re-issue the fetch for the current page.
    pub fn refresh(&mut self) -> Option<RequestTicket> {
        if !self.mounted {
            return None;
        }
        Some(self.begin(self.requested_page))
    }

    /// Apply a fetch result.
    ///
    /// Returns `false` when the result was stale (superseded ticket or view
    /// unmounted) and nothing changed.
    pub fn apply(&mut self, ticket: RequestTicket, result: CoreResult<Vec<Record>>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            log::debug!(
                "Dropping stale {} result for page {} (generation {} != {})",
                self.resource,
                ticket.page,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(records) => {
                self.page = paginate(&records, ticket.page, self.page_size);
                self.status = LoadStatus::Loaded;
                log::debug!(
                    "Loaded {} page {}/{} ({} of {} rows)",
                    self.resource,
                    self.page.current_page,
                    self.page.total_pages,
                    self.page.data.len(),
                    self.page.total
                );
            }
            Err(e) => {
                e.log(&format!("Loading {} page {}", self.resource, ticket.page));
                self.page = PageResult::empty(ticket.page, self.page_size);
                self.status = LoadStatus::Errored(self.error_message());
            }
        }
        self.cursor = 0;
        self.selected = None;
        true
    }

    fn begin(&mut self, page: usize) -> RequestTicket {
        self.generation += 1;
        self.requested_page = page;
        self.status = LoadStatus::Loading;
        RequestTicket {
            generation: self.generation,
            page,
        }
    }

    /// Message shown in place of the table when loading fails.
    pub fn error_message(&self) -> String {
        format!("Failed to load {}", self.resource)
    }

    // ========== Selection ==========

    /// Select the row at `index` on the current page.
    ///
    /// Only possible while [`LoadStatus::Loaded`]; returns the selected record.
    pub fn select(&mut self, index: usize) -> Option<&Record> {
        if !self.status.is_loaded() {
            return None;
        }
        let record = self.page.data.get(index)?.clone();
        self.cursor = index;
        self.selected = Some(record);
        self.selected.as_ref()
    }

    pub fn select_cursor(&mut self) -> Option<&Record> {
        self.select(self.cursor)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selected.as_ref()
    }

    // ========== Cursor ==========

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_down(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.rows().len().saturating_sub(1);
    }

    pub fn set_cursor(&mut self, index: usize) {
        if index < self.rows().len() {
            self.cursor = index;
        }
    }

    // ========== Accessors ==========

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn page(&self) -> &PageResult<Record> {
        &self.page
    }

    /// Rows to render: empty unless loaded.
    pub fn rows(&self) -> &[Record] {
        if self.status.is_loaded() {
            &self.page.data
        } else {
            &[]
        }
    }

    pub fn requested_page(&self) -> usize {
        self.requested_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
