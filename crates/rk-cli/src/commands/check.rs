use std::path::Path;

use colored::Colorize;
use rk_compose::Compositor;

pub fn run(file: &Path) -> Result<(), String> {
    let world = super::load_file(file)?;
    let compositor = Compositor::new(&world);

    let mut failed = 0;
    for room in world.rooms() {
        if let Err(e) = compositor.compose_room(room) {
            eprintln!("  {} {e}", "✗".red());
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!(
            "{failed} room{} could not be composed",
            super::plural(failed)
        ));
    }

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} entities, {} rooms composed",
        world.entity_count(),
        world.rooms().len()
    );

    Ok(())
}
