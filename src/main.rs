use anyhow::Context;
use clap::Parser;
use processos_common::{NoticeLevel, ProcessStatus};
use processos_dashboard::{cli, client, config, logging, render, session};
use cli::{Cli, Commands};
use client::HttpApi;
use config::Config;
use session::{Session, ViewOptions};

fn print_notices<A: client::ProcessApi>(session: &mut Session<A>) {
    for notice in session.drain_notices() {
        match notice.level {
            NoticeLevel::Error => eprintln!("✖ {}", notice.message),
            _ => println!("✔ {}", notice.message),
        }
    }
}

fn connect(config: &Config) -> anyhow::Result<Session<HttpApi>> {
    let ctx = config.request_context();
    tracing::debug!(base_url = %ctx.base_url, authenticated = ctx.token.is_some(), "connecting");
    let api = HttpApi::new(ctx, config.timeout_seconds).context("configuração da API inválida")?;
    Ok(Session::new(api))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load().context("falha ao ler a configuração")?;

    match cli.command {
        Commands::List { tab, search, sort, desc, page, rows, json } => {
            let mut session = connect(&config)?;
            session.refresh().await?;

            let options = ViewOptions {
                tab: cli::value_tab(tab),
                search,
                sort: cli::sort_spec(sort, desc),
                page: page.saturating_sub(1),
                rows_per_page: Some(rows.unwrap_or(config.rows_per_page)),
            };
            session.apply_view(&options)?;

            if json {
                println!("{}", render::render_json(session.controller())?);
            } else {
                println!("{}", render::render_table(session.controller()));
            }
        }

        Commands::Status { id, status } => {
            let mut session = connect(&config)?;
            session.refresh().await?;

            let clicked = ProcessStatus::from(status);
            let result = session.set_status(id, clicked).await;
            print_notices(&mut session);
            let confirmed = result?;
            println!("✔ Processo {} agora está {}", id, confirmed.label());
        }

        Commands::Assign { folder, ids } => {
            let mut session = connect(&config)?;
            session.refresh().await?;

            let result = session.assign(folder, &ids).await;
            print_notices(&mut session);
            let count = result?;
            tracing::info!(folder, count, "assignment finished");
        }

        Commands::Folders => {
            let mut session = connect(&config)?;
            session.refresh().await?;
            println!("{}", render::render_folders(session.controller().folders()));
        }

        Commands::Config { set_base_url, set_token, clear_token, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                changed = true;
                println!("✔ URL da API definida: {}", config.base_url);
            }

            if let Some(token) = set_token {
                config.set_token(token);
                changed = true;
                println!("✔ Token salvo");
            }

            if clear_token {
                config.clear_token();
                changed = true;
                println!("✔ Token removido");
            }

            if changed {
                config.save().context("falha ao salvar a configuração")?;
            }

            if show || !changed {
                let ctx = config.request_context();
                println!("Configuração:");
                println!("  URL da API: {}", ctx.base_url);
                println!("  Token: {}", if ctx.token.is_some() { "definido" } else { "não definido" });
                println!("  Timeout: {}s", config.timeout_seconds);
                println!("  Linhas por página: {}", config.rows_per_page);
            }
        }
    }

    Ok(())
}
