use clap::Parser;
use specsift::analyzer::Analyzer;
use specsift::classifier::Classifier;
use specsift::config::{AppConfig, Company};
use specsift::crawlers;
use specsift::extract;
use specsift::results::ProductRecord;
use specsift::storage::Storage;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match AppConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return;
        }
    };

    // Narrow to a single company when requested
    let companies: Vec<Company> = match &args.company {
        Some(name) => {
            let selected: Vec<Company> = config
                .companies
                .iter()
                .filter(|c| &c.name == name)
                .cloned()
                .collect();
            if selected.is_empty() {
                ::log::error!("Company {} is not in the configuration", name);
                return;
            }
            selected
        }
        None => config.companies.clone(),
    };

    let classifier = Classifier::new(&config.classifier);
    let storage = Storage::new(&config.output_dir);

    // Analysis is optional; without a key the pipeline stops at extraction
    let analyzer = if config.analyzer.api_key.is_empty() {
        ::log::info!("No analyzer API key configured, skipping analysis");
        None
    } else {
        match Analyzer::new(config.analyzer.clone()) {
            Ok(analyzer) => Some(analyzer),
            Err(e) => {
                ::log::error!("Failed to create analyzer: {}", e);
                return;
            }
        }
    };

    let start_time = std::time::Instant::now();
    let mut total_records = 0;

    for company in &companies {
        ::log::info!("Processing company: {}", company.name);
        match process_company(company, &config, &classifier, analyzer.as_ref(), &storage).await {
            Ok(count) => {
                total_records += count;
                ::log::info!("Finished {}: {} product records", company.name, count);
            }
            Err(e) => {
                ::log::error!("Processing {} failed: {}", company.name, e);
            }
        }
    }

    ::log::info!(
        "All companies done - {} records in {:.2} seconds",
        total_records,
        start_time.elapsed().as_secs_f64()
    );
}

/// Run one company through the full pipeline: crawl, classify, extract,
/// analyze, persist.
async fn process_company(
    company: &Company,
    config: &AppConfig,
    classifier: &Classifier,
    analyzer: Option<&Analyzer>,
    storage: &Storage,
) -> Result<usize, specsift::Error> {
    let pages = crawlers::crawl(company, &config.crawl).await?;
    ::log::info!("Crawled {} pages from {}", pages.len(), company.url);

    let mut records: Vec<ProductRecord> = Vec::new();
    for page in &pages {
        if !classifier.is_candidate(page) {
            continue;
        }
        let Some(mut record) = extract::extract_product(page) else {
            ::log::debug!("Candidate page {} yielded no fields", page.url);
            continue;
        };

        if let Some(analyzer) = analyzer {
            record.analysis = Some(analyzer.analyze(&record).await);
        }
        records.push(record);
    }

    let (json_path, _) = storage.save(&company.name, &records)?;
    ::log::debug!("JSON dump written to {}", json_path.display());
    Ok(records.len())
}
