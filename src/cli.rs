use clap::{Parser, Subcommand, ValueEnum};
use processos_common::{ProcessStatus, SortDirection, SortKey, SortSpec, ValueTab};

#[derive(Parser)]
#[command(name = "processos")]
#[command(about = "Painel de processos: listagem, status e atribuição a pastas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log de depuração
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lista processos com filtro por faixa de valor, busca e ordenação
    List {
        /// Aba de valor (0 = todos, 1 = 100-300 mil, 2 = 300-500 mil, 3 = acima de 500 mil)
        #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=3))]
        tab: u8,

        /// Busca por nome do réu ou número do processo
        #[arg(short, long)]
        search: Option<String>,

        /// Coluna de ordenação
        #[arg(long)]
        sort: Option<SortColumn>,

        /// Ordem decrescente
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Página (começando em 1)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Linhas por página
        #[arg(short, long)]
        rows: Option<usize>,

        /// Saída em JSON
        #[arg(long)]
        json: bool,
    },

    /// Altera o status de um processo (repetir o status atual volta para pendente)
    Status {
        /// ID do processo
        id: i64,

        /// Novo status
        status: StatusArg,
    },

    /// Adiciona processos a uma pasta
    Assign {
        /// ID da pasta de destino
        #[arg(short, long)]
        folder: i64,

        /// IDs dos processos
        #[arg(required = true)]
        ids: Vec<i64>,
    },

    /// Lista as pastas
    Folders,

    /// Mostra ou altera a configuração
    Config {
        /// URL base da API
        #[arg(long)]
        set_base_url: Option<String>,

        /// Token de acesso
        #[arg(long)]
        set_token: Option<String>,

        /// Remove o token salvo
        #[arg(long)]
        clear_token: bool,

        /// Mostra a configuração atual
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortColumn {
    Id,
    Numero,
    Reu,
    Documento,
    Valor,
    Status,
}

impl SortColumn {
    pub fn key(&self) -> SortKey {
        match self {
            SortColumn::Id => SortKey::Id,
            SortColumn::Numero => SortKey::NumeroProcesso,
            SortColumn::Reu => SortKey::NomeReu,
            SortColumn::Documento => SortKey::CpfCnpjReu,
            SortColumn::Valor => SortKey::ValorCausa,
            SortColumn::Status => SortKey::Status,
        }
    }
}

pub fn sort_spec(column: Option<SortColumn>, desc: bool) -> Option<SortSpec> {
    let direction = if desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    column.map(|c| SortSpec::new(c.key(), direction))
}

pub fn value_tab(index: u8) -> ValueTab {
    ValueTab::from_index(index as usize).unwrap_or_default()
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Pendente,
    Aprovado,
    Rejeitado,
}

impl From<StatusArg> for ProcessStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pendente => ProcessStatus::Pendente,
            StatusArg::Aprovado => ProcessStatus::Aprovado,
            StatusArg::Rejeitado => ProcessStatus::Rejeitado,
        }
    }
}
