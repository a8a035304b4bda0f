//! Hiring Decisions
//! ================
//! The classic hire/no-hire example: grow an ID3 tree on a handful of
//! interview candidates, print it, and compare it with a small forest.
//!
//! ```bash
//! cargo run --release --example hiring
//! ```

use id3forest::forest::SampleMethod;
use id3forest::loader::read_dataset;
use id3forest::metric::accuracy;
use id3forest::{build_tree, AttributeMap, Forest};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let dataset = read_dataset("resources/hiring.csv")?;
    println!(
        "Loaded {} candidates with attributes {:?}.",
        dataset.len(),
        dataset.attribute_names()
    );

    let tree = build_tree(dataset.examples(), None)?;
    println!("\n{}", tree);

    let queries = [
        AttributeMap::new()
            .with("level", "Junior")
            .with("lang", "Java")
            .with("tweets", "yes")
            .with("phd", "no"),
        AttributeMap::new()
            .with("level", "Junior")
            .with("lang", "Java")
            .with("tweets", "yes")
            .with("phd", "yes"),
        AttributeMap::new().with("level", "Intern"),
        AttributeMap::new().with("level", "Senior"),
    ];
    for q in queries.iter() {
        let attrs: Vec<String> = q.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        println!("{:<45} -> {}", attrs.join(", "), tree.classify(q));
    }

    let mut forest = Forest::default()
        .set_n_trees(25)
        .set_sample_method(SampleMethod::Bootstrap)
        .set_max_split_candidates(Some(2))
        .set_seed(42);
    forest.fit(&dataset)?;

    let inputs: Vec<AttributeMap> = dataset.examples().iter().map(|e| e.attributes.clone()).collect();
    let tree_preds = tree.classify_batch(&inputs, false);
    let forest_preds = forest.classify_batch(&inputs, true)?;
    println!("\nTraining accuracy, tree:   {:.3}", accuracy(&dataset.labels(), &tree_preds));
    println!("Training accuracy, forest: {:.3}", accuracy(&dataset.labels(), &forest_preds));

    let mut importance: Vec<(String, f32)> = forest.attribute_importance(true).into_iter().collect();
    importance.sort_by(|a, b| b.1.total_cmp(&a.1));
    println!("\nAttribute importance (share of splits):");
    for (attribute, share) in importance {
        println!("  {:<8} {:.3}", attribute, share);
    }

    Ok(())
}
