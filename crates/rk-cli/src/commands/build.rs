use std::path::Path;

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_file(file)?;

    let mut counts: Vec<_> = world.counts_by_kind().into_iter().collect();
    counts.sort();

    println!("  Loaded '{}' successfully.", file.display());
    println!();
    println!("  {} entities", world.entity_count());
    for (kind, count) in counts {
        println!("    {count:>4} {kind}");
    }

    Ok(())
}
