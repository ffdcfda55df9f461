//! Search and facet refinements
//!
//! Views narrow the access-filtered set further with a case-insensitive
//! substring search and equality facets. Every refinement keeps input order
//! and they combine by logical AND, so the order of application is irrelevant.

use itsm_model::{Alert, MonitoredItem, Ticket};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Facet a selector can narrow on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facet {
    Status,
    Severity,
    Priority,
}

/// Selected value for one facet; `All` disables the facet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetSelector {
    #[default]
    All,
    Only(String),
}

impl FacetSelector {
    /// Escape value that turns a facet off
    pub const ALL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            FacetSelector::All
        } else {
            FacetSelector::Only(value.to_string())
        }
    }

    fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            FacetSelector::All => true,
            FacetSelector::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl From<String> for FacetSelector {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for FacetSelector {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<FacetSelector> for String {
    fn from(selector: FacetSelector) -> Self {
        match selector {
            FacetSelector::All => FacetSelector::ALL.to_string(),
            FacetSelector::Only(value) => value,
        }
    }
}

/// Display fields searched by free text
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Facet values exposed by an item; `None` when the item has no such facet
pub trait Faceted {
    fn facet_value(&self, facet: Facet) -> Option<&str>;
}

/// Search term plus facet selectors, applied together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Refinement {
    /// Lowercased search term; empty matches everything
    search: String,
    facets: Vec<(Facet, FacetSelector)>,
}

impl Refinement {
    /// A refinement that narrows nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_lowercase();
        self
    }

    /// Select a value for a facet, replacing any earlier selection for it
    pub fn facet(mut self, facet: Facet, value: impl Into<FacetSelector>) -> Self {
        let selector = value.into();
        self.facets.retain(|(existing, _)| *existing != facet);
        self.facets.push((facet, selector));
        self
    }

    /// Whether nothing would be narrowed
    pub fn is_pass_through(&self) -> bool {
        self.search.is_empty()
            && self
                .facets
                .iter()
                .all(|(_, selector)| *selector == FacetSelector::All)
    }

    /// Whether a single item passes the search and every facet
    pub fn matches<T: Searchable + Faceted + ?Sized>(&self, item: &T) -> bool {
        let facets_ok = self
            .facets
            .iter()
            .all(|(facet, selector)| selector.accepts(item.facet_value(*facet)));
        if !facets_ok {
            return false;
        }

        self.search.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search))
    }

    /// Items passing the refinement, in input order
    pub fn apply<'i, T, I>(&self, items: I) -> Vec<&'i T>
    where
        T: Searchable + Faceted + 'i,
        I: IntoIterator<Item = &'i T>,
    {
        let refined: Vec<_> = items.into_iter().filter(|item| self.matches(*item)).collect();
        debug!("Refinement {:?} kept {} items", self, refined.len());
        refined
    }
}

impl Searchable for Alert {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.resource_name.as_str(), self.message.as_str()]
    }
}

impl Faceted for Alert {
    fn facet_value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            Facet::Severity => Some(self.severity.as_str()),
            Facet::Priority => None,
        }
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.id.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Faceted for Ticket {
    fn facet_value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.status.as_str()),
            Facet::Priority => Some(self.priority.as_str()),
            Facet::Severity => None,
        }
    }
}

impl Searchable for MonitoredItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.kind.as_str()]
    }
}

impl Faceted for MonitoredItem {
    fn facet_value(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Status => Some(self.current_status.as_str()),
            Facet::Severity | Facet::Priority => None,
        }
    }
}
