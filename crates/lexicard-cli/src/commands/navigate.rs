//! The `lexicard navigate` command.

use anyhow::Result;

use lexicard_core::routing::Router;

pub fn execute(paths: Vec<String>) -> Result<()> {
    let mut router = Router::new();

    for path in &paths {
        let nav = router.navigate(path)?;
        println!("{} ({}) {}", nav.route.path, nav.route.title, nav.transition);
    }

    println!("History: {}", router.history().entries().join(" > "));
    Ok(())
}
