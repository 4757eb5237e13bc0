use anyhow::Result;
use clap::Parser;

use find_fix::source::{ReaderTagSource, TagSource};
use find_fix::{config, report, resolver, source};

#[derive(clap::Parser)]
#[command(
    name = "find-fix",
    about = "Reduce the release tags containing a fix to the latest-release frontier"
)]
struct Args {
    #[arg(help = "Tag names to resolve; read one per line from stdin when omitted")]
    tags: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Only consider full releases (drop -A/-M/-RC tags)")]
    release: bool,

    #[arg(short, long, help = "Display all releases containing the fix, skipping reduction")]
    all: bool,

    #[arg(short, long, help = "Strip a repository prefix from each tag before parsing")]
    prefix: Option<String>,

    #[arg(short, long, help = "Context label (commit hash or ticket) to prefix the report")]
    label: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            report::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let raw_tags = if args.tags.is_empty() {
        let stdin = std::io::stdin();
        let mut tag_source = ReaderTagSource::new(stdin.lock());
        tag_source.list_tags()?
    } else {
        args.tags
    };

    let mut prefixes = config.tags.strip_prefixes.clone();
    if let Some(prefix) = args.prefix {
        prefixes.push(prefix);
    }

    let releases_only = args.release || config.tags.releases_only;

    let tags: Vec<String> = raw_tags
        .iter()
        .map(|tag| source::strip_repository_prefix(tag, &prefixes))
        .filter(|tag| resolver::is_well_formed_tag(tag, releases_only))
        .collect();

    let resolved = if args.all || config.report.show_all {
        tags
    } else {
        resolver::reduce_tags(&tags)
    };

    println!("{}", report::format_report(args.label.as_deref(), &resolved));
    Ok(())
}
