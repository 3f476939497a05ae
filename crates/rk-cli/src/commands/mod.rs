pub mod build;
pub mod check;
pub mod export;
pub mod list;
pub mod render;
pub mod show;

use std::io::IsTerminal;
use std::path::Path;

use rk_core::World;
use rk_format::LoadResult;
use rk_format::diagnostics::{render_diagnostics, summarize};

/// Load a game document and print its diagnostics.
/// Returns the loaded world if there are no errors.
fn load_file(path: &Path) -> Result<World, String> {
    let result = rk_format::load_file(path);
    print_diagnostics(&result, path);

    if result.has_errors() {
        Err("loading failed with errors".into())
    } else {
        Ok(result.world)
    }
}

/// Print diagnostics to stderr using ariadne.
fn print_diagnostics(result: &LoadResult, path: &Path) {
    let Some(summary) = summarize(&result.diagnostics) else {
        return;
    };

    let filename = path.display().to_string();
    let color = std::io::stderr().is_terminal();
    eprint!(
        "{}",
        render_diagnostics(&result.source, &filename, &result.diagnostics, color)
    );
    eprintln!("  {summary}");
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Write `content` to `output`, or print it when no path was given.
fn write_output(content: &str, output: Option<&Path>) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
