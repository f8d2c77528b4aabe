use salary_scraper_lib::{collect_stats, logger, table, Config};
use salary_scraper_lib::{HhClient, HhSearchConfig, SjClient, SjSearchConfig};

use clap::Parser;
use log::info;
use std::error::Error;

// Search terms are qualified the way the job boards expect them, e.g.
// "Программист Python"; the table label is the term's second word.
const POSITION_QUALIFIER: &str = "Программист";

const HH_TABLE_TITLE: &str = "HeadHunter Moscow";
const SJ_TABLE_TITLE: &str = "SuperJob Moscow";

/// Compare average programmer salaries on HeadHunter and SuperJob.
#[derive(Parser)]
#[command(name = "salary-scraper", version)]
#[command(about = "Average programmer salaries per language, from HeadHunter and SuperJob")]
struct Args {
    /// Programming languages to compare, e.g. Python Java Rust
    #[arg(required = true)]
    languages: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();
    let args = Args::parse();

    // 1. Configuration (SJ_TOKEN from the environment or a local .env)
    let config = Config::from_env()?;

    // 2. One client per source
    let hh = HhClient::new(HhSearchConfig::default());
    let sj = SjClient::new(config.sj_token, SjSearchConfig::default());

    let mut hh_statistics = Vec::new();
    let mut sj_statistics = Vec::new();
    let total = args.languages.len();

    // 3. Fetch and reduce, one search term at a time, both sources in turn
    for (i, language) in args.languages.iter().enumerate() {
        let position = format!("{} {}", POSITION_QUALIFIER, language);
        let label = position
            .split_whitespace()
            .nth(1)
            .unwrap_or(language.as_str())
            .to_string();

        info!("Processing {} / {} : {}", i + 1, total, position);

        let hh_vacancies = hh.fetch_vacancies(&position)?;
        hh_statistics.push((
            label.clone(),
            collect_stats(&hh_vacancies, |vacancy| vacancy.rub_salary()),
        ));

        let sj_vacancies = sj.fetch_vacancies(&position)?;
        sj_statistics.push((
            label,
            collect_stats(&sj_vacancies, |vacancy| vacancy.rub_salary()),
        ));
    }

    // 4. One table per source
    println!("{}", table::render(HH_TABLE_TITLE, &hh_statistics));
    println!("{}", table::render(SJ_TABLE_TITLE, &sj_statistics));

    info!("Done. Compared {} position(s).", total);
    Ok(())
}
