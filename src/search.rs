use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::anatomy::{EntityKind, EntityStore, NodeKind};

pub const DEFAULT_RESULT_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: String,
    pub kind: NodeKind,
    pub name_ja: String,
    pub name_en: String,
    pub name_latin: String,
    pub search_text: String,
}

#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    pub fn build(store: &EntityStore) -> Self {
        let records = EntityKind::ALL
            .into_iter()
            .flat_map(|kind| store.all(kind))
            .map(|record| {
                let names = record.names();
                SearchRecord {
                    id: record.id().to_owned(),
                    kind: record.node_kind(),
                    name_ja: names.name_ja.clone(),
                    name_en: names.en().to_owned(),
                    name_latin: names.latin().to_owned(),
                    search_text: format!("{} {} {}", names.name_ja, names.en(), names.latin())
                        .to_lowercase(),
                }
            })
            .collect();

        Self { records }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn search(&self, query: &str, limit: usize) -> Vec<&SearchRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| record.search_text.contains(&query))
            .take(limit)
            .collect()
    }

    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&SearchRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                matcher
                    .fuzzy_match(&record.search_text, &query)
                    .map(|score| (score, position, record))
            })
            .collect::<Vec<_>>();

        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_score, _position, record)| record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anatomy::fixtures::{bone, muscle, names};
    use crate::anatomy::{Dataset, StructureType};

    fn index() -> SearchIndex {
        let mut biceps = muscle("biceps");
        biceps.names = names("上腕二頭筋");
        biceps.names.name_en = Some("Biceps brachii".to_owned());
        biceps.names.name_latin = Some("Musculus biceps brachii".to_owned());

        let mut brachialis = muscle("brachialis");
        brachialis.names = names("上腕筋");
        brachialis.names.name_en = Some("Brachialis".to_owned());

        let mut fascia = bone("plantar_fascia");
        fascia.names = names("足底腱膜");
        fascia.names.name_en = Some("Plantar fascia".to_owned());
        fascia.structure_type = Some(StructureType::SoftTissue);

        SearchIndex::build(&EntityStore::new(Dataset {
            muscles: vec![biceps, brachialis],
            bones: vec![bone("humerus"), fascia],
            ..Default::default()
        }))
    }

    #[test]
    fn search_text_joins_all_names_lowercased() {
        let index = index();
        let biceps = &index.records()[0];
        assert_eq!(
            biceps.search_text,
            "上腕二頭筋 biceps brachii musculus biceps brachii"
        );
        let humerus = &index.records()[2];
        assert_eq!(humerus.search_text, "humerus  ");
        assert_eq!(index.records()[3].kind, NodeKind::SoftTissue);
    }

    #[test]
    fn search_is_case_insensitive_substring_in_index_order() {
        let index = index();
        let ids = index
            .search("BRACHI", DEFAULT_RESULT_LIMIT)
            .into_iter()
            .map(|record| record.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["biceps", "brachialis"]);
        assert_eq!(index.search("brachi", 1).len(), 1);
    }

    #[test]
    fn blank_query_yields_nothing() {
        let index = index();
        assert!(index.search("", 20).is_empty());
        assert!(index.search("   ", 20).is_empty());
    }

    #[test]
    fn longer_query_narrows_results() {
        let index = index();
        for (short, long) in [("b", "br"), ("br", "brachialis"), ("上腕", "上腕筋")] {
            let wide = index.search(short, usize::MAX);
            let narrow = index.search(long, usize::MAX);
            assert!(narrow.iter().all(|record| wide.contains(record)));
        }
    }

    #[test]
    fn suggestions_tolerate_gaps() {
        let index = index();
        assert!(index.search("bcps", 20).is_empty());
        let suggested = index.suggest("bcps", 5);
        assert_eq!(suggested.first().map(|record| record.id.as_str()), Some("biceps"));
    }
}
