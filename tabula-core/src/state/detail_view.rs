//! Single record view state

use tabula_client::{Record, Resource};

use super::LoadStatus;
use crate::error::{CoreError, CoreResult};

/// Handle for one detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    id: u64,
}

impl DetailTicket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// State of a view showing one record by id (post details).
#[derive(Debug, Clone)]
pub struct DetailView {
    resource: Resource,
    status: LoadStatus,
    record: Option<Record>,
    requested_id: Option<u64>,
    generation: u64,
    mounted: bool,
}

impl DetailView {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            status: LoadStatus::Idle,
            record: None,
            requested_id: None,
            generation: 0,
            mounted: false,
        }
    }

    /// Mount the view for `id` and start loading it.
    pub fn load(&mut self, id: u64) -> DetailTicket {
        self.mounted = true;
        self.generation += 1;
        self.requested_id = Some(id);
        self.status = LoadStatus::Loading;
        self.record = None;
        DetailTicket {
            generation: self.generation,
            id,
        }
    }

    /// Reload the current id, if any.
    pub fn refresh(&mut self) -> Option<DetailTicket> {
        if !self.mounted {
            return None;
        }
        let id = self.requested_id?;
        Some(self.load(id))
    }

    /// Apply a fetch result. Returns `false` for stale results.
    ///
    /// A missing record is an error state, not an empty success.
    pub fn apply(&mut self, ticket: DetailTicket, result: CoreResult<Record>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            log::debug!(
                "Dropping stale {} {} result",
                self.resource.singular(),
                ticket.id
            );
            return false;
        }

        match result {
            Ok(record) => {
                self.record = Some(record);
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                e.log(&format!("Loading {} {}", self.resource.singular(), ticket.id));
                self.record = None;
                self.status = LoadStatus::Errored(self.error_message(&e));
            }
        }
        true
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
        if self.status.is_loading() {
            self.status = LoadStatus::Idle;
        }
    }

    fn error_message(&self, err: &CoreError) -> String {
        let noun = capitalize(self.resource.singular());
        match err {
            CoreError::NotFound { .. } => format!("{noun} not found"),
            _ => format!("Failed to load {}", self.resource.singular()),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn record(&self) -> Option<&Record> {
        self.record.as_ref()
    }

    pub fn requested_id(&self) -> Option<u64> {
        self.requested_id
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::record;

    #[test]
    fn loads_record() {
        let mut view = DetailView::new(Resource::Posts);
        let ticket = view.load(1);
        assert!(view.status().is_loading());

        assert!(view.apply(ticket, Ok(record(1))));
        assert!(view.status().is_loaded());
        assert_eq!(view.record().map(Record::id), Some(1));
    }

    #[test]
    fn missing_record_is_not_found_error() {
        let mut view = DetailView::new(Resource::Posts);
        let ticket = view.load(999);
        view.apply(
            ticket,
            Err(CoreError::NotFound {
                resource: Resource::Posts,
                id: 999,
            }),
        );
        assert_eq!(view.status().error(), Some("Post not found"));
        assert!(view.record().is_none());
    }

    #[test]
    fn network_failure_message() {
        let mut view = DetailView::new(Resource::Posts);
        let ticket = view.load(1);
        view.apply(ticket, Err(CoreError::NetworkError("down".into())));
        assert_eq!(view.status().error(), Some("Failed to load post"));
    }

    #[test]
    fn switching_id_discards_previous_fetch() {
        let mut view = DetailView::new(Resource::Posts);
        let first = view.load(1);
        let second = view.load(2);

        assert!(!view.apply(first, Ok(record(1))));
        assert!(view.apply(second, Ok(record(2))));
        assert_eq!(view.record().map(Record::id), Some(2));
    }

    #[test]
    fn unmount_discards_in_flight_result() {
        let mut view = DetailView::new(Resource::Posts);
        let ticket = view.load(5);
        view.unmount();

        assert!(!view.apply(ticket, Ok(record(5))));
        assert_eq!(view.status(), &LoadStatus::Idle);
        assert!(view.refresh().is_none());
    }
}
