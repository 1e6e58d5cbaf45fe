//! Filter-sort pipeline
//!
//! `records × tab × search × sort -> ordered view`. Recomputed from scratch on
//! every input change; no incremental patching.

use crate::bucket::ValueTab;
use crate::parser::parse_valor_causa;
use crate::types::ProcessRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    NumeroProcesso,
    NomeReu,
    CpfCnpjReu,
    ValorCausa,
    Status,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::NumeroProcesso => "numero_processo",
            SortKey::NomeReu => "nome_reu",
            SortKey::CpfCnpjReu => "cpf_cnpj_reu",
            SortKey::ValorCausa => "valor_causa",
            SortKey::Status => "status",
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::NumeroProcesso => "Número do Processo",
            SortKey::NomeReu => "Nome do Réu",
            SortKey::CpfCnpjReu => "CPF/CNPJ",
            SortKey::ValorCausa => "Valor da Causa (R$)",
            SortKey::Status => "Status",
        }
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::NumeroProcesso => a.numero_processo.cmp(&b.numero_processo),
            SortKey::NomeReu => a.nome_reu.cmp(&b.nome_reu),
            SortKey::CpfCnpjReu => a.cpf_cnpj_reu.cmp(&b.cpf_cnpj_reu),
            SortKey::ValorCausa => parse_valor_causa(&a.valor_causa)
                .total_cmp(&parse_valor_causa(&b.valor_causa)),
            SortKey::Status => a.status.cmp(&b.status),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(SortKey::Id),
            "numero" | "numero_processo" => Ok(SortKey::NumeroProcesso),
            "nome" | "reu" | "nome_reu" => Ok(SortKey::NomeReu),
            "cpf" | "cnpj" | "cpf_cnpj_reu" => Ok(SortKey::CpfCnpjReu),
            "valor" | "valor_causa" => Ok(SortKey::ValorCausa),
            "status" => Ok(SortKey::Status),
            _ => Err(format!(
                "Unknown sort key: {}. Use id, numero, nome, cpf, valor, or status",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key: Some(key), direction }
    }

    /// Header click: ascending on a new key, flip to descending on a repeat
    /// click while ascending, back to ascending otherwise.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = match (self.key, self.direction) {
            (Some(current), SortDirection::Ascending) if current == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        Self { key: Some(key), direction }
    }

    pub fn direction_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

/// Case-insensitive substring match on defendant name or case number.
///
/// A blank term matches every record.
pub fn matches_search(record: &ProcessRecord, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.nome_reu.to_lowercase().contains(&needle)
        || record.numero_processo.to_lowercase().contains(&needle)
}

/// Build the ordered, filtered view
///
/// 1. keep records inside the tab's value range
/// 2. keep records matching the (already debounced) search term
/// 3. stable sort by the active key; ties keep their relative order
pub fn compute_view<'a>(
    records: &'a [ProcessRecord],
    tab: ValueTab,
    search: &str,
    sort: SortSpec,
) -> Vec<&'a ProcessRecord> {
    let mut view: Vec<&ProcessRecord> = records
        .iter()
        .filter(|r| tab.matches_record(r))
        .filter(|r| matches_search(r, search))
        .collect();

    if let Some(key) = sort.key {
        // sort_by is stable
        view.sort_by(|a, b| {
            let ord = key.compare(a, b);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, numero: &str, nome: &str, valor: &str) -> ProcessRecord {
        ProcessRecord {
            id,
            numero_processo: numero.to_string(),
            nome_reu: nome.to_string(),
            cpf_cnpj_reu: String::new(),
            valor_causa: valor.to_string(),
            status: Default::default(),
        }
    }

    fn ids(view: &[&ProcessRecord]) -> Vec<i64> {
        view.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<ProcessRecord> {
        vec![
            record(1, "0001-11.2024", "Maria Silva", "1.200,00"),
            record(2, "0002-22.2024", "João Souza", "900,00"),
            record(3, "0003-33.2024", "Ana Silva", "150.000,00"),
            record(4, "0004-44.2024", "Carlos Lima", "350.000,00"),
            record(5, "0005-55.2024", "Beatriz Costa", "900,00"),
        ]
    }

    #[test]
    fn test_search_silva_keeps_only_first() {
        let records = vec![
            record(1, "1", "Maria Silva", "1,00"),
            record(2, "2", "João Souza", "1,00"),
        ];
        let view = compute_view(&records, ValueTab::All, "Silva", SortSpec::default());
        assert_eq!(ids(&view), vec![1]);
    }

    #[test]
    fn test_search_case_insensitive_and_numero() {
        let records = sample();
        let view = compute_view(&records, ValueTab::All, "sILVa", SortSpec::default());
        assert_eq!(ids(&view), vec![1, 3]);

        let view = compute_view(&records, ValueTab::All, "44.2024", SortSpec::default());
        assert_eq!(ids(&view), vec![4]);

        let view = compute_view(&records, ValueTab::All, "   ", SortSpec::default());
        assert_eq!(view.len(), records.len());
    }

    #[test]
    fn test_currency_sort_is_numeric() {
        let records = vec![
            record(1, "a", "x", "1.200,00"),
            record(2, "b", "y", "900,00"),
        ];
        let asc = compute_view(
            &records,
            ValueTab::All,
            "",
            SortSpec::new(SortKey::ValorCausa, SortDirection::Ascending),
        );
        assert_eq!(ids(&asc), vec![2, 1]);

        let desc = compute_view(
            &records,
            ValueTab::All,
            "",
            SortSpec::new(SortKey::ValorCausa, SortDirection::Descending),
        );
        assert_eq!(ids(&desc), vec![1, 2]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = sample();
        let asc = compute_view(
            &records,
            ValueTab::All,
            "",
            SortSpec::new(SortKey::ValorCausa, SortDirection::Ascending),
        );
        // 2 and 5 share 900,00 and keep input order
        assert_eq!(ids(&asc), vec![2, 5, 1, 3, 4]);

        let desc = compute_view(
            &records,
            ValueTab::All,
            "",
            SortSpec::new(SortKey::ValorCausa, SortDirection::Descending),
        );
        assert_eq!(ids(&desc), vec![4, 3, 1, 2, 5]);
    }

    #[test]
    fn test_tab_filter_then_search() {
        let records = sample();
        let view = compute_view(&records, ValueTab::From100kTo300k, "", SortSpec::default());
        assert_eq!(ids(&view), vec![3]);

        let view = compute_view(&records, ValueTab::From100kTo300k, "souza", SortSpec::default());
        assert!(view.is_empty());
    }

    #[test]
    fn test_compute_view_is_idempotent() {
        let records = sample();
        let sort = SortSpec::new(SortKey::NomeReu, SortDirection::Descending);
        let first = ids(&compute_view(&records, ValueTab::All, "a", sort));
        let second = ids(&compute_view(&records, ValueTab::All, "a", sort));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_sort_key_keeps_input_order() {
        let records = sample();
        let view = compute_view(&records, ValueTab::All, "", SortSpec::default());
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_spec_toggle() {
        let spec = SortSpec::default().toggled(SortKey::NomeReu);
        assert_eq!(spec, SortSpec::new(SortKey::NomeReu, SortDirection::Ascending));

        let spec = spec.toggled(SortKey::NomeReu);
        assert_eq!(spec.direction, SortDirection::Descending);

        let spec = spec.toggled(SortKey::NomeReu);
        assert_eq!(spec.direction, SortDirection::Ascending);

        let spec = spec.toggled(SortKey::NomeReu).toggled(SortKey::ValorCausa);
        assert_eq!(spec, SortSpec::new(SortKey::ValorCausa, SortDirection::Ascending));
        assert_eq!(spec.direction_for(SortKey::NomeReu), None);
    }

    #[test]
    fn test_matches_search() {
        let r = record(1, "0001-11.2024", "Maria Silva", "1,00");
        assert!(matches_search(&r, ""));
        assert!(matches_search(&r, "MARIA"));
        assert!(matches_search(&r, "0001"));
        assert!(!matches_search(&r, "souza"));
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("valor".parse::<SortKey>(), Ok(SortKey::ValorCausa));
        assert_eq!("NOME_REU".parse::<SortKey>(), Ok(SortKey::NomeReu));
        assert!("prazo".parse::<SortKey>().is_err());
    }
}
