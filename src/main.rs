// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;

use startup_atlas::{
    all_stages, all_tags, featured, filter_companies, recently_updated, request_intro,
    AtlasConfig, AtlasError, Catalog, CatalogSource, Company, Facet, FilterParams, Readiness,
    SortMode, SystemBrowser, RECENT_LIMIT,
};

#[derive(Debug, Parser)]
#[command(name = "startup-atlas", version, about = "Japan Startup Atlas - curated startup directory")]
struct Cli {
    /// Which dataset to browse (profiles | curated)
    #[arg(long, global = true, env = "ATLAS_CATALOG")]
    catalog: Option<CatalogSource>,

    /// Intro form URL opened by `intro`
    #[arg(long, global = true, env = "ATLAS_INTRO_FORM_URL", hide_env_values = true)]
    intro_form_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive directory (default)
    Browse,

    /// Print the filtered directory
    List {
        /// Free-text search over names, summary, HQ, stage and tags
        #[arg(short, long, default_value = "")]
        query: String,

        /// Required tag; repeat for AND
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// all | green | yellow | red
        #[arg(short, long, default_value = "all")]
        readiness: Facet<Readiness>,

        /// Funding stage label, exact match, or "all"
        #[arg(short, long, default_value = "all")]
        stage: Facet<String>,

        /// relevance | name | founded_desc
        #[arg(long, default_value = "relevance")]
        sort: SortMode,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print one company profile
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Print every distinct tag
    Tags,

    /// Print every distinct funding stage
    Stages,

    /// Print the featured companies
    Featured,

    /// Print the most recently updated companies
    Recent {
        #[arg(long, default_value_t = RECENT_LIMIT)]
        limit: usize,
    },

    /// Open the intro request form for a company
    Intro {
        id: String,

        /// Print the link instead of opening a browser
        #[arg(long)]
        print: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    startup_atlas::init_tracing("warn");

    let cli = Cli::parse();
    let config = AtlasConfig::from_env()?
        .with_catalog(cli.catalog)
        .with_intro_form_url(cli.intro_form_url.clone());

    tracing::debug!(catalog = %config.catalog, "starting");

    let companies = Catalog::load(config.catalog).into_companies();

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => run_ui_mode(companies, config)?,
        Command::List { query, tags, readiness, stage, sort, format } => {
            let params = FilterParams::new()
                .with_query(query)
                .with_tags(tags)
                .with_readiness(readiness)
                .with_stage(stage)
                .with_sort(sort);
            run_list(&companies, &params, format)?;
        }
        Command::Show { id, json } => run_show(&companies, &id, json)?,
        Command::Tags => all_tags(&companies).iter().for_each(|t| println!("{}", t)),
        Command::Stages => all_stages(&companies).iter().for_each(|s| println!("{}", s)),
        Command::Featured => print_table(&featured(&companies)),
        Command::Recent { limit } => {
            for c in recently_updated(&companies, limit) {
                let updated = if c.last_updated.is_empty() { "-" } else { c.last_updated.as_str() };
                println!("{:<10} {}", updated, c.name_en);
            }
        }
        Command::Intro { id, print } => run_intro(&companies, &config, &id, print)?,
    }

    Ok(())
}

fn run_list(companies: &[Company], params: &FilterParams, format: OutputFormat) -> Result<()> {
    let results = filter_companies(companies, params);

    match format {
        OutputFormat::Table => {
            print_table(&results);
            println!("\n({} results)", results.len());
            if results.is_empty() {
                println!("No startups match your filters. Try removing a tag or resetting filters.");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Csv => write_csv(&results, io::stdout())?,
    }

    Ok(())
}

fn print_table(companies: &[Company]) {
    println!(
        "{:<18} {:<22} {:<18} {:<10} {:<8} {}",
        "ID", "NAME", "READINESS", "STAGE", "FOUNDED", "TAGS"
    );
    for c in companies {
        let meta = c.readiness.meta();
        println!(
            "{:<18} {:<22} {:<18} {:<10} {:<8} {}",
            c.id,
            c.name_en,
            format!("{} {}", meta.emoji, meta.label),
            c.funding_stage,
            c.founded,
            c.tags.join(", ")
        );
    }
}

fn write_csv<W: io::Write>(companies: &[Company], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "id", "name_en", "name_jp", "one_liner", "tags", "founded", "hq", "funding_stage",
        "total_funding", "website", "readiness", "last_updated",
    ])?;

    for c in companies {
        writer.write_record([
            c.id.clone(),
            c.name_en.clone(),
            c.name_jp.clone().unwrap_or_default(),
            c.one_liner.clone(),
            c.tags.join(";"),
            c.founded.to_string(),
            c.hq.clone(),
            c.funding_stage.clone(),
            c.total_funding.to_string(),
            c.website.clone(),
            c.readiness.to_string(),
            c.last_updated.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn find<'a>(companies: &'a [Company], id: &str) -> Result<&'a Company> {
    startup_atlas::find_company(companies, id)
        .ok_or_else(|| AtlasError::UnknownCompany(id.to_string()))
        .context("lookup failed")
}

fn run_show(companies: &[Company], id: &str, json: bool) -> Result<()> {
    let c = find(companies, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(c)?);
        return Ok(());
    }

    let meta = c.readiness.meta();
    println!("{}", c.display_name());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}\n", c.one_liner);
    println!("  Readiness:     {} {} ({})", meta.emoji, meta.label, meta.hint);
    println!("  Founded:       {}", c.founded);
    println!("  HQ:            {}", c.hq);
    println!("  Stage:         {}", c.funding_stage);
    println!("  Total funding: {}", c.total_funding);
    println!("  Website:       {}", c.website);
    println!("  Tags:          {}", c.tags.join(", "));

    for (title, items) in [
        ("What they do", &c.what_they_do),
        ("Why it matters in Japan", &c.why_matters_in_japan),
        ("Target customers", &c.target_customers),
        ("Business model", &c.business_model),
        ("Competitive landscape", &c.competitive_landscape),
        ("What makes it interesting", &c.what_makes_interesting),
    ] {
        if items.is_empty() {
            continue;
        }
        println!("\n{}", title);
        for item in items {
            println!("  • {}", item);
        }
    }

    if !c.editors_note.is_empty() {
        println!("\nEditor's note\n  {}", c.editors_note);
    }
    println!("\nWhat this means for overseas partners\n  {}", meta.partner_note);
    if !c.disclosure.is_empty() {
        println!("\nDisclosure: {}", c.disclosure);
    }
    if !c.last_updated.is_empty() {
        println!("Last updated: {}", c.last_updated);
    }

    Ok(())
}

fn run_intro(companies: &[Company], config: &AtlasConfig, id: &str, print: bool) -> Result<()> {
    let company = find(companies, id)?;

    if print {
        let url = config.intro_link()?;
        println!("{}", url);
        return Ok(());
    }

    match request_intro(config, company, &SystemBrowser) {
        Ok(url) => {
            println!("✓ Opened intro form for {}: {}", company.name_en, url);
            Ok(())
        }
        Err(AtlasError::IntroFormNotConfigured) => {
            eprintln!("⚠️  {}", AtlasError::IntroFormNotConfigured);
            bail!("intro form URL is not configured")
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(companies: Vec<Company>, config: AtlasConfig) -> Result<()> {
    println!("🗾 Loading Japan Startup Atlas...\n");
    println!("✓ Loaded {} startups ({} catalog)", companies.len(), config.catalog);
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(companies, config);
    ui::run_ui(&mut app, &SystemBrowser)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_companies: Vec<Company>, _config: AtlasConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: startup-atlas list");
    std::process::exit(1);
}
