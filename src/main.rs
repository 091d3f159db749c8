use std::env;
use std::path::PathBuf;
use std::process;
use anyhow::{Context, Result, anyhow};
use log::{error, info, warn, LevelFilter};
use xmldoc_smells::cs::source_finder::{find_cs_files, read_source};
use xmldoc_smells::cs::tree_printer::render_tree;
use xmldoc_smells::cs::CsParser;
use xmldoc_smells::logging;
use xmldoc_smells::smells::{sort_findings, XmlDocAnalyzer};
use xmldoc_smells::XmlDocOptions;

/// Exit status when findings were reported
const EXIT_FINDINGS: i32 = 1;
/// Exit status for usage, IO and parse errors
const EXIT_ERROR: i32 = 2;

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    target: PathBuf,
    config: Option<PathBuf>,
    json: bool,
    verbose: bool,
    dump_tree: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut target = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => cli.json = true,
            "--verbose" | "-v" => cli.verbose = true,
            "--dump-tree" => cli.dump_tree = true,
            "--config" => {
                let path = iter.next().ok_or("--config needs a file path")?;
                cli.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            path => {
                if target.is_some() {
                    return Err(format!("Unexpected extra argument: {}", path));
                }
                target = Some(PathBuf::from(path));
            }
        }
    }

    cli.target = target.ok_or("Missing <path> argument")?;
    Ok(cli)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <path> [--config <file>] [--json] [--verbose] [--dump-tree]", program);
    eprintln!("  <path>: A .cs file or a directory searched recursively");
    eprintln!("  --config <file>: Detector options as .json, .yaml or .yml");
    eprintln!("  --json: Print findings as JSON");
    eprintln!("  --verbose: Write debug output to the log file");
    eprintln!("  --dump-tree: Print the syntax tree of a single file and exit");
    eprintln!("Exit status: 0 clean, 1 findings reported, 2 error");
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("xmldoc_smells");

    let cli = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(cli) => cli,
        Err(message) => {
            // Use eprintln for usage info since logger isn't initialized yet
            eprintln!("{}", message);
            print_usage(program);
            process::exit(EXIT_ERROR);
        }
    };

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logging::init_logger(level) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(EXIT_ERROR);
    }

    info!("XML doc smells starting");
    info!("Command line arguments: {:?}", args);

    match run(&cli).await {
        Ok(0) => process::exit(0),
        Ok(_) => process::exit(EXIT_FINDINGS),
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(EXIT_ERROR);
        }
    }
}

/// Analyze the target and print the findings, returning how many were found
async fn run(cli: &CliArgs) -> Result<usize> {
    let options = match &cli.config {
        Some(path) => XmlDocOptions::load(path)
            .await
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => XmlDocOptions::default(),
    };
    info!("Options: {:?}", options);

    if cli.dump_tree {
        dump_tree(cli).await?;
        return Ok(0);
    }

    let files = find_cs_files(&cli.target).await?;
    info!("Found {} C# files under {}", files.len(), cli.target.display());

    let analyzer = XmlDocAnalyzer::new(&options);
    let mut parser = CsParser::new()?;
    let mut findings = Vec::new();
    let mut failed_files = 0;

    for path in &files {
        let content = read_source(path).await?;
        let file_path = path.display().to_string();

        match parser.parse_source(path, content) {
            Ok(file) => {
                let file_findings = analyzer.analyze(&file, &file_path);
                info!("{}: {} findings", file_path, file_findings.len());
                findings.extend(file_findings);
            }
            Err(e) => {
                warn!("Skipping {}: {}", file_path, e);
                failed_files += 1;
            }
        }
    }

    sort_findings(&mut findings);

    if cli.json {
        let json = serde_json::to_string_pretty(&findings).context("Failed to serialize findings")?;
        println!("{}", json);
    } else {
        for finding in &findings {
            println!("{}", finding);
        }
        eprintln!("{} findings in {} files", findings.len(), files.len());
    }

    if failed_files > 0 {
        return Err(anyhow!("{} files could not be parsed", failed_files));
    }

    Ok(findings.len())
}

async fn dump_tree(cli: &CliArgs) -> Result<()> {
    let content = read_source(&cli.target).await?;
    let mut parser = CsParser::new()?;
    let tree = parser
        .parse(&content, None)
        .with_context(|| format!("Failed to parse {}", cli.target.display()))?;

    print!("{}", render_tree(tree.root_node(), &content));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = parse_args(&args(&["src", "--config", "opts.yaml", "--json", "--verbose", "--dump-tree"])).unwrap();
        assert_eq!(
            cli,
            CliArgs {
                target: PathBuf::from("src"),
                config: Some(PathBuf::from("opts.yaml")),
                json: true,
                verbose: true,
                dump_tree: true,
            }
        );
    }

    #[test]
    fn test_parse_requires_target() {
        assert!(parse_args(&args(&["--json"])).is_err());
        assert!(parse_args(&args(&[])).is_err());
    }

    #[test]
    fn test_parse_rejects_bad_arguments() {
        assert!(parse_args(&args(&["a", "b"])).is_err());
        assert!(parse_args(&args(&["a", "--fix"])).is_err());
        assert!(parse_args(&args(&["a", "--config"])).is_err());
    }
}
