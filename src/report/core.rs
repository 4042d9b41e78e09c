use log::debug;
use ordered_float::OrderedFloat;

use crate::memo::{Memo, Origin, Value};
use crate::utils::format_number;

/// Reconstructs the proof tree for `target`, grouped by depth for top-down
/// printing: layer 0 holds the target's own line, layer 1 its operands, and
/// so on. Returns no layers when the target was never recorded.
pub fn reconstruct(target: f64, memo: &Memo) -> Vec<Vec<String>> {
    let mut layers: Vec<Vec<String>> = Vec::new();
    walk(OrderedFloat(target), memo, 0, &mut layers);
    layers
}

fn walk(value: Value, memo: &Memo, depth: usize, layers: &mut Vec<Vec<String>>) {
    let Some(entry) = memo.get(value) else {
        debug!("No derivation recorded for {}", value);
        return;
    };

    let line = format!(
        "{}({}) = {}",
        format_number(value.into_inner()),
        entry.cost,
        entry.origin
    );

    match &entry.origin {
        Origin::Base { repeats, .. } => {
            // the bare digit explains itself; repeated digits get a leaf line
            if *repeats > 1 {
                push_line(layers, depth, line);
            }
        }
        Origin::Unary { source, .. } => {
            let source = *source;
            push_line(layers, depth, line);
            walk(source, memo, depth + 1, layers);
        }
        Origin::Binary { left, right, .. } => {
            let (left, right) = (*left, *right);
            push_line(layers, depth, line);
            walk(left, memo, depth + 1, layers);
            walk(right, memo, depth + 1, layers);
        }
    }
}

fn push_line(layers: &mut Vec<Vec<String>>, depth: usize, line: String) {
    if layers.len() <= depth {
        layers.resize_with(depth + 1, Vec::new);
    }
    if let Some(layer) = layers.get_mut(depth) {
        layer.push(line);
    }
}
