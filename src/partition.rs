//! Partition
//!
//! Grouping of labeled examples by the value they hold for one attribute.
use crate::data::{AttributeValue, LabeledExample};
use crate::entropy::partition_entropy;
use crate::errors::Id3Error;
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Attribute value -> examples holding that value.
/// Values iterate in ascending order, so children are grown deterministically.
pub type Partition<'a> = BTreeMap<AttributeValue, Vec<&'a LabeledExample>>;

/// Group `examples` by their value for `attribute`.
pub fn partition_by<'a, E: Borrow<LabeledExample>>(
    examples: &'a [E],
    attribute: &str,
) -> Result<Partition<'a>, Id3Error> {
    let mut groups = Partition::new();
    for (row, example) in examples.iter().enumerate() {
        let example: &LabeledExample = example.borrow();
        let key = example
            .attributes
            .get(attribute)
            .ok_or_else(|| Id3Error::MissingAttribute(attribute.to_string(), row))?;
        match groups.get_mut(key) {
            Some(group) => group.push(example),
            None => {
                groups.insert(key.clone(), vec![example]);
            }
        }
    }
    Ok(groups)
}

/// Entropy of the partition of `examples` on `attribute`.
pub fn partition_entropy_by<E: Borrow<LabeledExample>>(examples: &[E], attribute: &str) -> Result<f64, Id3Error> {
    let partition = partition_by(examples, attribute)?;
    Ok(partition_entropy(partition.values().map(Vec::as_slice)))
}
