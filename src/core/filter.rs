use crate::domain::model::Prospect;
use chrono::NaiveDate;

/// Filter inputs for the saved-prospect listing. Blank text criteria and
/// absent bounds are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub sector: Option<String>,
    pub location: Option<String>,
    pub probability_min: Option<u8>,
    pub probability_max: Option<u8>,
    pub added_from: Option<NaiveDate>,
    pub added_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Company name, case-insensitive, ascending.
    Name,
    /// Most recently added first.
    Date,
    /// Highest hire probability first.
    #[default]
    Probability,
}

impl FilterCriteria {
    fn matches(&self, prospect: &Prospect) -> bool {
        if let Some(sector) = &self.sector {
            let needle = sector.trim().to_lowercase();
            if !needle.is_empty() && !prospect.sector.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            let needle = location.trim().to_lowercase();
            if !needle.is_empty() && !prospect.location.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(min) = self.probability_min {
            if prospect.hire_probability < min {
                return false;
            }
        }
        if let Some(max) = self.probability_max {
            if prospect.hire_probability > max {
                return false;
            }
        }
        // Date bounds are whole days in UTC: the lower bound starts at
        // 00:00:00 and the upper bound runs through 23:59:59, so prospects
        // added on a boundary day are included.
        if let Some(from) = self.added_from {
            let start = from.and_time(chrono::NaiveTime::MIN).and_utc();
            if prospect.added_at < start {
                return false;
            }
        }
        if let Some(to) = self.added_to {
            if let Some(end) = to.and_hms_opt(23, 59, 59) {
                if prospect.added_at > end.and_utc() {
                    return false;
                }
            }
        }
        true
    }
}

/// Applies `criteria` then `sort_key` over `prospects`, returning a new
/// ordered sequence. Pure: the input is never mutated and identical inputs
/// yield identical output. All sorts are stable, so records with equal keys
/// keep their stored relative order.
pub fn filter_and_sort(
    prospects: &[Prospect],
    criteria: &FilterCriteria,
    sort_key: SortKey,
) -> Vec<Prospect> {
    let mut visible: Vec<Prospect> = prospects
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    match sort_key {
        SortKey::Name => visible.sort_by(|a, b| {
            a.company_name
                .to_lowercase()
                .cmp(&b.company_name.to_lowercase())
        }),
        SortKey::Date => visible.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        SortKey::Probability => {
            visible.sort_by(|a, b| b.hire_probability.cmp(&a.hire_probability))
        }
    }

    visible
}
