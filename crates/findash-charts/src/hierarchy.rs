//! Sector -> Sub-Industry -> Security hierarchy for sunburst/treemap.
//!
//! The security table stays tidy; this module only derives the
//! parent-pointer arrays Plotly wants. Every input row becomes exactly
//! one leaf with its weight and return untouched. Internal nodes carry
//! summed weights and a weight-weighted mean return so ring/tile colors
//! stay meaningful at every level.

use findash_common::Result;
use findash_data::SecurityTable;

/// Flattened hierarchy arrays, index-aligned
#[derive(Debug, Clone, Default)]
pub struct HierarchyNodes {
    /// Unique node ids (slash-joined paths)
    pub ids: Vec<String>,
    /// Display labels
    pub labels: Vec<String>,
    /// Parent id per node, empty string for roots
    pub parents: Vec<String>,
    /// Node value: leaf weight, or summed descendant weight
    pub values: Vec<f64>,
    /// Color scalar per node: the period return
    pub colors: Vec<f64>,
}

struct GroupAccum {
    id: String,
    label: String,
    parent: String,
    weight_sum: f64,
    weighted_return: f64,
    return_sum: f64,
    count: usize,
}

impl GroupAccum {
    fn mean_return(&self) -> f64 {
        if self.weight_sum > 0.0 {
            self.weighted_return / self.weight_sum
        } else {
            // all-zero weights, fall back to the plain mean
            self.return_sum / self.count as f64
        }
    }
}

fn accumulate(groups: &mut Vec<GroupAccum>, id: &str, label: &str, parent: &str, weight: f64, ret: f64) {
    match groups.iter_mut().find(|g| g.id == id) {
        Some(group) => {
            group.weight_sum += weight;
            group.weighted_return += weight * ret;
            group.return_sum += ret;
            group.count += 1;
        }
        None => groups.push(GroupAccum {
            id: id.to_string(),
            label: label.to_string(),
            parent: parent.to_string(),
            weight_sum: weight,
            weighted_return: weight * ret,
            return_sum: ret,
            count: 1,
        }),
    }
}

/// Derive the hierarchy arrays for one return period.
///
/// Fails with `MissingColumn` if the period is unknown.
pub fn build_hierarchy(table: &SecurityTable, period: &str) -> Result<HierarchyNodes> {
    let returns = table.period_returns(period)?;

    let mut sectors: Vec<GroupAccum> = Vec::new();
    let mut sub_industries: Vec<GroupAccum> = Vec::new();

    for i in 0..table.len() {
        let sector = &table.sectors()[i];
        let sub = &table.sub_industries()[i];
        let weight = table.weights()[i];
        let ret = returns[i];

        let sub_id = format!("{}/{}", sector, sub);
        accumulate(&mut sectors, sector, sector, "", weight, ret);
        accumulate(&mut sub_industries, &sub_id, sub, sector, weight, ret);
    }

    let mut nodes = HierarchyNodes::default();
    for group in sectors.iter().chain(&sub_industries) {
        nodes.ids.push(group.id.clone());
        nodes.labels.push(group.label.clone());
        nodes.parents.push(group.parent.clone());
        nodes.values.push(group.weight_sum);
        nodes.colors.push(group.mean_return());
    }
    for i in 0..table.len() {
        let sector = &table.sectors()[i];
        let sub = &table.sub_industries()[i];
        let security = &table.securities()[i];

        nodes.ids.push(format!("{}/{}/{}", sector, sub, security));
        nodes.labels.push(security.clone());
        nodes.parents.push(format!("{}/{}", sector, sub));
        nodes.values.push(table.weights()[i]);
        nodes.colors.push(returns[i]);
    }

    Ok(nodes)
}
