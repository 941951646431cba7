use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use deal_analyzer_core::models::deal::{DealId, DealRecord};
use deal_analyzer_core::models::evaluation::Evaluation;
use deal_analyzer_core::models::inputs::RawDealForm;
use deal_analyzer_core::models::settings::Settings;
use deal_analyzer_core::DealAnalyzer;

#[derive(Parser, Debug)]
#[command(name = "deal-analyzer", about = "Profit, ROI and break-even for resale deals")]
struct Cli {
    /// Directory holding saved deals
    #[arg(long, env = "DEAL_ANALYZER_DATA_DIR", default_value = ".deal-analyzer")]
    data_dir: PathBuf,

    /// Optional JSON settings file
    #[arg(long, env = "DEAL_ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show fee, net profit, ROI, break-even and verdict
    Evaluate(NumberArgs),
    /// Evaluate and save the deal
    Save {
        #[command(flatten)]
        numbers: NumberArgs,
        #[arg(long, default_value = "")]
        item: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List saved deals (newest first)
    List {
        /// Show every deal instead of the recent window
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Delete a saved deal
    Remove { id: String },
    /// Print saved deals as JSON
    Export {
        #[arg(long, default_value_t = false)]
        csv: bool,
    },
}

/// Raw numeric fields; normalization happens in the core, so "12,5" is fine.
#[derive(Args, Debug)]
struct NumberArgs {
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    buy: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    sell: String,
    #[arg(long, default_value = "12", allow_hyphen_values = true)]
    fee_pct: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    ship_buy: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    ship_sell: String,
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    misc: String,
}

impl NumberArgs {
    fn into_form(self, item: String, notes: String) -> RawDealForm {
        RawDealForm {
            item,
            buy: self.buy,
            sell: self.sell,
            fee_pct: self.fee_pct,
            ship_buy: self.ship_buy,
            ship_sell: self.ship_sell,
            misc: self.misc,
            notes,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deal_analyzer=info,deal_analyzer_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let mut analyzer = DealAnalyzer::open_dir(&cli.data_dir, settings)
        .with_context(|| format!("failed to open data dir {}", cli.data_dir.display()))?;

    match cli.command {
        Command::Evaluate(numbers) => {
            let form = numbers.into_form(String::new(), String::new());
            print_evaluation(&analyzer, &analyzer.evaluate(&form));
        }
        Command::Save {
            numbers,
            item,
            notes,
        } => {
            let form = numbers.into_form(item, notes);
            print_evaluation(&analyzer, &analyzer.evaluate(&form));
            let record = analyzer.try_save_deal(&form).context("failed to save deal")?;
            info!(id = %record.id, "deal saved");
            println!("Saved {} ({})", record.item, record.id);
        }
        Command::List { all } => {
            let deals = if all {
                analyzer.deals()
            } else {
                analyzer.recent_deals()
            };
            if deals.is_empty() {
                println!("No saved deals yet.");
            }
            for deal in deals {
                print_record(&analyzer, deal);
            }
        }
        Command::Remove { id } => {
            let id = DealId::from(id);
            let removed = analyzer.try_remove_deal(&id).context("failed to write saved deals")?;
            if removed {
                println!("Removed {id}");
            } else {
                println!("No deal with id {id}");
            }
        }
        Command::Export { csv } => {
            if csv {
                print!("{}", analyzer.export_deals_to_csv()?);
            } else {
                println!("{}", analyzer.export_deals_to_json()?);
            }
        }
    }

    Ok(())
}

fn print_evaluation(analyzer: &DealAnalyzer, eval: &Evaluation) {
    let r = &eval.result;
    println!("Marketplace fee:       {}", analyzer.format_money(r.fee));
    println!("Net profit:            {}", analyzer.format_money(r.net));
    println!("ROI:                   {}", analyzer.format_pct(r.roi));
    println!("Break-even sell price: {}", analyzer.format_money(r.breakeven));
    println!("Verdict:               {}", eval.verdict);
}

fn print_record(analyzer: &DealAnalyzer, deal: &DealRecord) {
    let when = deal
        .created_at_utc()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "?".to_string());
    println!(
        "{}  {}  [{}]  {}",
        deal.id,
        when,
        analyzer.verdict_for(deal),
        deal.item
    );
    println!(
        "    Net: {}  ROI: {}  BE: {}",
        analyzer.format_money(deal.result.net),
        analyzer.format_pct(deal.result.roi),
        analyzer.format_money(deal.result.breakeven),
    );
    if !deal.notes.is_empty() {
        println!("    Notes: {}", deal.notes);
    }
}
