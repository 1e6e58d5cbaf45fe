//! Plain-text and JSON rendering of the current view

use crate::error::Result;
use processos_common::{Folder, ProcessRecord, ViewController};

const HEADERS: [&str; 6] = ["ID", "Número do Processo", "Nome do Réu", "CPF/CNPJ", "Valor da Causa (R$)", "Status"];

fn cells(record: &ProcessRecord) -> [String; 6] {
    [
        record.id.to_string(),
        record.numero_processo.clone(),
        record.nome_reu.clone(),
        record.cpf_cnpj_reu.clone(),
        record.valor_causa.clone(),
        record.status.label().to_string(),
    ]
}

/// Aligned table of `rows` with a header line
pub fn render_rows(rows: &[&ProcessRecord]) -> String {
    let body: Vec<[String; 6]> = rows.iter().map(|r| cells(r)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(widths.iter())
            .map(|(v, w)| format!("{:<w$}", v, w = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(HEADERS.to_vec())];
    out.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in &body {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

/// Current page plus the tab and pagination footer
pub fn render_table(controller: &ViewController) -> String {
    let state = controller.state();
    let view = controller.filtered();
    let window = view.window(state.page, state.rows_per_page);

    if window.rows.is_empty() {
        return "Nenhum processo encontrado.".to_string();
    }

    let mut out = render_rows(window.rows);
    out.push_str(&format!(
        "\n\nAba: {} | {} | página {} de {}",
        state.active_tab.label(),
        window.label(),
        window.page + 1,
        window.page_count().max(1)
    ));
    out
}

pub fn render_json(controller: &ViewController) -> Result<String> {
    Ok(serde_json::to_string_pretty(&controller.page_rows())?)
}

pub fn render_folders(folders: &[Folder]) -> String {
    if folders.is_empty() {
        return "Nenhuma pasta encontrada.".to_string();
    }
    folders
        .iter()
        .map(|f| format!("{:>4}  {} ({} processos)", f.id, f.name, f.processos.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use processos_common::ProcessStatus;

    fn record(id: i64, nome: &str) -> ProcessRecord {
        ProcessRecord {
            id,
            numero_processo: format!("000{}-11.2023.8.26.0100", id),
            nome_reu: nome.to_string(),
            cpf_cnpj_reu: "123.456.789-00".to_string(),
            valor_causa: "150.000,00".to_string(),
            status: ProcessStatus::Aprovado,
        }
    }

    #[test]
    fn test_render_rows_aligns_columns() {
        let a = record(1, "Maria Silva");
        let b = record(22, "Jo");
        let text = render_rows(&[&a, &b]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Número do Processo"));
        assert!(lines[2].contains("Maria Silva"));
        assert!(lines[3].starts_with("22"));
        assert!(lines[3].ends_with("Aprovado"));
    }

    #[test]
    fn test_render_folders_empty() {
        assert_eq!(render_folders(&[]), "Nenhuma pasta encontrada.");
    }
}
