use chrono::NaiveDate;
use rand::seq::SliceRandom;

use crate::record::ImageRecord;

/// Number of records added to the visible window per "load more".
pub const PAGE_SIZE: usize = 20;

/// How far back the `Recent` filter reaches, in days.
pub const RECENT_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Records strictly newer than today minus [`RECENT_DAYS`].
    Recent,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Recent => "Recent",
            CategoryFilter::Category(name) => name,
        }
    }

    fn accepts(&self, record: &ImageRecord, today: NaiveDate) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Recent => record.date > today - chrono::Duration::days(RECENT_DAYS),
            CategoryFilter::Category(name) => record.category == *name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Random,
    Name,
}

impl SortMode {
    pub const ALL: [Self; 3] = [Self::Newest, Self::Random, Self::Name];

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest",
            SortMode::Random => "Random",
            SortMode::Name => "Name",
        }
    }
}

/// Transient view state. Not persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub sort: SortMode,
    pub search: String,
    /// Number of pages currently visible; "load more" increments this.
    pub pages: usize,
    /// Index of the record shown in the detail viewer, into the *unfiltered*
    /// collection.
    pub modal: Option<usize>,
    pub importing: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: CategoryFilter::All,
            sort: SortMode::Newest,
            search: String::new(),
            pages: 1,
            modal: None,
            importing: false,
        }
    }
}

impl ViewState {
    /// Reset the visible window to the first page. Called whenever the
    /// filter, search or sort changes.
    pub fn reset_pages(&mut self) {
        self.pages = 1;
    }

    pub fn load_more(&mut self) {
        self.pages += 1;
    }

    pub fn visible_limit(&self) -> usize {
        self.pages.max(1) * PAGE_SIZE
    }

    pub fn modal_can_prev(&self) -> bool {
        matches!(self.modal, Some(idx) if idx > 0)
    }

    pub fn modal_can_next(&self, len: usize) -> bool {
        matches!(self.modal, Some(idx) if idx + 1 < len)
    }

    /// Move the viewer to the previous record. Clamps at index 0 instead of
    /// wrapping.
    pub fn modal_prev(&mut self) {
        if self.modal_can_prev() {
            if let Some(idx) = self.modal.as_mut() {
                *idx -= 1;
            }
        }
    }

    /// Move the viewer to the next record. Clamps at the last index instead
    /// of wrapping.
    pub fn modal_next(&mut self, len: usize) {
        if self.modal_can_next(len) {
            if let Some(idx) = self.modal.as_mut() {
                *idx += 1;
            }
        }
    }

    /// Keep the viewer index valid after the collection shrinks; closes the
    /// viewer when the collection is empty.
    pub fn clamp_modal(&mut self, len: usize) {
        match self.modal {
            Some(_) if len == 0 => self.modal = None,
            Some(idx) if idx >= len => self.modal = Some(len - 1),
            _ => {}
        }
    }
}

/// The derived view: filter, search, sort, then cut to the visible window.
#[derive(Debug)]
pub struct VisibleSet<'a> {
    pub records: Vec<&'a ImageRecord>,
    /// Whether more filtered records exist beyond the current window, i.e.
    /// whether the "load more" control should be shown.
    pub has_more: bool,
    /// Total number of records that passed filter + search, pre-pagination.
    pub total_matching: usize,
}

/// Compute the visible record sequence for the current view state.
///
/// Pipeline order is fixed: category filter, then free-text search, then
/// sort, then pagination. `Random` performs a full unseeded shuffle on every
/// call, so repeated renders under that mode differ by design.
pub fn visible_records<'a>(
    records: &'a [ImageRecord],
    view: &ViewState,
    today: NaiveDate,
) -> VisibleSet<'a> {
    let needle = view.search.trim().to_lowercase();

    let mut matching: Vec<&ImageRecord> = records
        .iter()
        .filter(|r| view.filter.accepts(r, today))
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.description.to_lowercase().contains(&needle)
        })
        .collect();

    match view.sort {
        // Stable: records sharing a date keep their collection order.
        SortMode::Newest => matching.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::Random => matching.shuffle(&mut rand::thread_rng()),
        SortMode::Name => {
            matching.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }

    let total_matching = matching.len();
    let limit = view.visible_limit();
    let has_more = total_matching > limit;
    matching.truncate(limit);

    VisibleSet {
        records: matching,
        has_more,
        total_matching,
    }
}
