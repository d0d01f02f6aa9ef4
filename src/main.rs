use anyhow::{bail, Context, Result};
use atomic_catalog::{
    catalog::{Catalog, ExportFormat, ImageFilter},
    cli::{Cli, Commands},
    config::Config,
    model::Category,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List {
            category,
            desktop,
            nvidia,
            stability,
            long,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let catalog = Catalog::builtin()?;

            if let Some(name) = &category {
                if catalog.get(name).is_none() {
                    bail!("Unknown category: {}", name);
                }
            }

            let filter = ImageFilter {
                category,
                desktop,
                nvidia,
                stability,
                ..config.image_filter()
            };
            let images = catalog.query(&filter);
            info!("{} images match", images.len());

            for (category, image) in images {
                if long {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        image.name,
                        image.properties.desktop,
                        image.properties.nvidia,
                        image.effective_stability(category),
                        image.url
                    );
                } else {
                    println!("{}", image.url);
                }
            }
        }
        Commands::Show { category } => {
            let catalog = Catalog::builtin()?;
            let found = catalog.get(&category).with_context(|| {
                let known: Vec<&str> = catalog.category_names().collect();
                format!(
                    "Unknown category: {} (known: {})",
                    category,
                    known.join(", ")
                )
            })?;
            print_category(found);
        }
        Commands::Export { format, output } => {
            let config = Config::load(cli.config.as_deref())?;
            let format = format
                .or(config.default_format)
                .unwrap_or(ExportFormat::Json);

            let catalog = Catalog::builtin()?.filtered(&config.image_filter());
            let rendered = catalog.render(format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote catalog to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Validate => {
            let catalog = Catalog::builtin()?;
            let issues = catalog.validate();
            if !issues.is_empty() {
                for issue in &issues {
                    println!("{}", issue);
                }
                bail!("Catalog has {} issue(s)", issues.len());
            }
            println!(
                "Catalog OK: {} categories, {} images",
                catalog.categories.len(),
                catalog.image_count()
            );
        }
        Commands::Version => {
            println!("atomic-catalog {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn print_category(category: &Category) {
    println!("{} ({})", category.category, category.stability);
    println!("{}", category.repo);
    println!("Registry: {}", category.registries().join(", "));
    println!();
    for line in &category.description {
        println!("{}", line);
    }
    println!();

    let width = category
        .images
        .iter()
        .map(|image| image.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    println!(
        "{:<width$}  {:<8}  {:<11}  {:<12}  URL",
        "NAME",
        "DESKTOP",
        "NVIDIA",
        "STABILITY",
        width = width
    );
    for image in &category.images {
        println!(
            "{:<width$}  {:<8}  {:<11}  {:<12}  {}",
            image.name,
            image.properties.desktop.as_str(),
            image.properties.nvidia.as_str(),
            image.effective_stability(category).as_str(),
            image.url,
            width = width
        );
    }
}
