use serde::{Deserialize, Serialize};

use crate::RenderValue;

/// Minimum, maximum and burst IOPS of a volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QoS {
    #[serde(rename = "minIOPS", default)]
    pub min_iops: i64,
    #[serde(rename = "maxIOPS", default)]
    pub max_iops: i64,
    #[serde(rename = "burstIOPS", default)]
    pub burst_iops: i64,
}

/// A named QoS tier offered by the backend (`Gold`, `Bronze`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolType {
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Qos", default)]
    pub qos: QoS,
}

impl RenderValue for QoS {
    fn render_into(&self, out: &mut String) {
        out.push_str("{MinIOPS:");
        self.min_iops.render_into(out);
        out.push_str(" MaxIOPS:");
        self.max_iops.render_into(out);
        out.push_str(" BurstIOPS:");
        self.burst_iops.render_into(out);
        out.push('}');
    }
}

impl RenderValue for VolType {
    fn render_into(&self, out: &mut String) {
        out.push_str("{Type:");
        out.push_str(&self.type_name);
        out.push_str(" QoS:");
        self.qos.render_into(out);
        out.push('}');
    }
}
