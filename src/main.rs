use std::env;
use std::process;
use zpath::{LogTracer, QueryEngine, RecordingTracer, ZpathError, run_query_file};

struct CliArgs {
    svg_path: String,
    expression: String,
    selection: Vec<String>,
    trace: bool,
    json: bool,
}

fn print_usage(program: &str) {
    eprintln!("Select elements of an SVG drawing with a path expression.");
    eprintln!();
    eprintln!(
        "Usage: {} <path/to/drawing.svg> <expression> [--select id1,id2] [--trace] [--json]",
        program
    );
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} drawing.svg '/l/g[0]'", program);
    eprintln!("  {} drawing.svg '//p[-1]' --trace", program);
    eprintln!("  {} drawing.svg '/g[0:2]' --select g1,g2,g3 --json", program);
}

fn parse_args(args: &[String]) -> Option<CliArgs> {
    let mut positional = Vec::new();
    let mut selection = Vec::new();
    let mut trace = false;
    let mut json = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--trace" => trace = true,
            "--json" => json = true,
            "--select" => {
                let ids = iter.next()?;
                selection.extend(
                    ids.split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(String::from),
                );
            }
            flag if flag.starts_with("--") => return None,
            _ => positional.push(arg.clone()),
        }
    }

    let [svg_path, expression]: [String; 2] = positional.try_into().ok()?;
    Some(CliArgs {
        svg_path,
        expression,
        selection,
        trace,
        json,
    })
}

fn run(cli: &CliArgs) -> Result<(), ZpathError> {
    let engine = QueryEngine::new();
    let report = if cli.trace {
        let mut tracer = RecordingTracer::new();
        let report = run_query_file(&engine, &cli.svg_path, &cli.expression, cli.selection.as_slice(), &mut tracer)?;
        report.with_trace(tracer.lines())
    } else {
        run_query_file(&engine, &cli.svg_path, &cli.expression, cli.selection.as_slice(), &mut LogTracer)?
    };

    for line in &report.trace {
        eprintln!("{}", line);
    }
    if cli.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    for record in &report.matches {
        println!("{}\t{}", record.id, record.kind);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("zpath");
    let Some(cli) = parse_args(&args) else {
        print_usage(program);
        process::exit(2);
    };

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
