//! Claim-value tabs
//!
//! The table is partitioned into coarse value ranges shown as tabs.
//! Tab 0 shows everything; tabs 1-3 are half-open ranges over the parsed
//! `valor_causa`.

use crate::parser::parse_valor_causa;
use crate::types::ProcessRecord;
use serde::{Deserialize, Serialize};

/// Value-range tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTab {
    #[default]
    All,
    /// [100 000, 300 000)
    From100kTo300k,
    /// [300 000, 500 000)
    From300kTo500k,
    /// [500 000, ∞)
    Above500k,
}

impl ValueTab {
    pub const ALL: [ValueTab; 4] = [
        ValueTab::All,
        ValueTab::From100kTo300k,
        ValueTab::From300kTo500k,
        ValueTab::Above500k,
    ];

    pub fn index(&self) -> usize {
        match self {
            ValueTab::All => 0,
            ValueTab::From100kTo300k => 1,
            ValueTab::From300kTo500k => 2,
            ValueTab::Above500k => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Inclusive lower and exclusive upper bound; `None` for the all tab
    pub fn range(&self) -> Option<(f64, f64)> {
        match self {
            ValueTab::All => None,
            ValueTab::From100kTo300k => Some((100_000.0, 300_000.0)),
            ValueTab::From300kTo500k => Some((300_000.0, 500_000.0)),
            ValueTab::Above500k => Some((500_000.0, f64::INFINITY)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueTab::All => "Todos",
            ValueTab::From100kTo300k => "100 mil a 300 mil",
            ValueTab::From300kTo500k => "300 mil a 500 mil",
            ValueTab::Above500k => "Acima de 500 mil",
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match self.range() {
            None => true,
            Some((low, high)) => value >= low && value < high,
        }
    }

    pub fn matches_record(&self, record: &ProcessRecord) -> bool {
        match self {
            ValueTab::All => true,
            _ => self.matches(parse_valor_causa(&record.valor_causa)),
        }
    }
}

/// Range tab holding `value`
///
/// Returns `None` below 100 000; such rows are only listed under the all tab.
pub fn classify(value: f64) -> Option<ValueTab> {
    ValueTab::ALL[1..]
        .iter()
        .copied()
        .find(|tab| tab.matches(value))
}

/// Number of records per tab, indexed like [`ValueTab::index`]
pub fn tab_counts(records: &[ProcessRecord]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    counts[0] = records.len();
    for record in records {
        if let Some(tab) = classify(parse_valor_causa(&record.valor_causa)) {
            counts[tab.index()] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, valor: &str) -> ProcessRecord {
        ProcessRecord {
            id,
            numero_processo: format!("{:07}", id),
            nome_reu: String::new(),
            cpf_cnpj_reu: String::new(),
            valor_causa: valor.to_string(),
            status: Default::default(),
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(99_999.99), None);
        assert_eq!(classify(100_000.0), Some(ValueTab::From100kTo300k));
        assert_eq!(classify(299_999.99), Some(ValueTab::From100kTo300k));
        assert_eq!(classify(300_000.0), Some(ValueTab::From300kTo500k));
        assert_eq!(classify(499_999.99), Some(ValueTab::From300kTo500k));
        assert_eq!(classify(500_000.0), Some(ValueTab::Above500k));
        assert_eq!(classify(1e12), Some(ValueTab::Above500k));
    }

    #[test]
    fn test_range_tabs_are_exclusive() {
        let samples = [100_000.0, 150_000.0, 299_999.0, 300_000.0, 420_000.5, 500_000.0, 9e9];
        for value in samples {
            let hits = ValueTab::ALL[1..].iter().filter(|t| t.matches(value)).count();
            assert_eq!(hits, 1, "value {} matched {} range tabs", value, hits);
            assert!(ValueTab::All.matches(value));
        }
    }

    #[test]
    fn test_all_tab_matches_everything() {
        for value in [0.0, -5.0, 50.0, 1e15] {
            assert!(ValueTab::All.matches(value));
        }
        assert!(ValueTab::All.matches_record(&record(1, "lixo")));
    }

    #[test]
    fn test_150k_lands_in_tab_1() {
        let r = record(1, "150.000,00");
        assert!(ValueTab::From100kTo300k.matches_record(&r));
        assert!(!ValueTab::From300kTo500k.matches_record(&r));
        assert_eq!(classify(parse_valor_causa(&r.valor_causa)).map(|t| t.index()), Some(1));
    }

    #[test]
    fn test_index_roundtrip() {
        for tab in ValueTab::ALL {
            assert_eq!(ValueTab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(ValueTab::from_index(4), None);
    }

    #[test]
    fn test_tab_counts() {
        let records = vec![
            record(1, "50.000,00"),
            record(2, "150.000,00"),
            record(3, "250.000,00"),
            record(4, "350.000,00"),
            record(5, "R$ 2.000.000,00"),
        ];
        assert_eq!(tab_counts(&records), [5, 2, 1, 1]);
    }
}
