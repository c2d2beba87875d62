use anyhow::Result;
use podlift_config::Config;
use podlift_engine::{AdapterRegistry, Dependency, Document, RenderOptions, io};
use std::{
    env,
    fmt::Write as _,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut target: Option<PathBuf> = None;
    let mut no_contents = false;
    let mut show_deps = false;
    for arg in &args[1..] {
        match arg.as_str() {
            "--no-contents" => no_contents = true,
            "--deps" => show_deps = true,
            _ if !arg.starts_with('-') && target.is_none() => {
                target = Some(PathBuf::from(arg));
            }
            _ => usage(&args[0]),
        }
    }
    let Some(target) = target else {
        usage(&args[0]);
    };

    // Search roots come from the config file when one exists
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            process::exit(1);
        }
    };

    let registry = match AdapterRegistry::with_builtins() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let options = RenderOptions {
        no_contents: no_contents || config.no_contents,
    };

    if target.is_dir() {
        let report = directory_report(&target, show_deps, &options, &config.search_paths, &registry)?;
        print!("{report}");
        return Ok(());
    }

    let mut document = Document::new(&target, registry);
    if document.instructions().is_empty() {
        eprintln!("No documentation found in '{}'", target.display());
        return Ok(());
    }

    if show_deps {
        for dep in document.dependencies(&config.search_paths) {
            println!("{}", dependency_line(dep));
        }
    } else {
        println!("{}", document.to_html(&options));
    }

    Ok(())
}

/// Report over every documented file found under a directory: either
/// the rendered HTML fragments, each preceded by a comment naming its
/// source, or the per-file dependency lists.
fn directory_report(
    dir: &Path,
    show_deps: bool,
    options: &RenderOptions,
    search_roots: &[PathBuf],
    registry: &Arc<AdapterRegistry>,
) -> Result<String> {
    let mut report = String::new();
    for mut document in io::find_documents(dir, None, registry)? {
        if show_deps {
            writeln!(report, "{}:", document.path().display())?;
            for dep in document.dependencies(search_roots) {
                writeln!(report, "  {}", dependency_line(dep))?;
            }
        } else {
            writeln!(report, "<!-- {} -->", document.path().display())?;
            writeln!(report, "{}", document.to_html(options))?;
        }
    }
    Ok(report)
}

fn dependency_line(dep: &Dependency) -> String {
    match &dep.path {
        Some(root) => format!("{} ({})", dep.name, root.display()),
        None => dep.name.clone(),
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <file-or-directory> [--no-contents] [--deps]");
    process::exit(1);
}
