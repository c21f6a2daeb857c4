//! Comparison record: what was hashed, in what order, and how the
//! comparison went.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pod::NamespacedName;
use crate::trace::Tracer;

/// Recording tracer. Appends every pod in call order, keeps the computed
/// signature from `sign` and the expected one from `check`.
///
/// `node_name` and the announced pod count feed the operator report only;
/// they stay out of the wire format. `Clone` yields a deep copy with its own
/// backing storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(skip)]
    pub node_name: String,
    #[serde(skip)]
    pub num_pods: usize,
    pub fingerprint_expected: String,
    pub fingerprint_computed: String,
    pub pods: Vec<NamespacedName>,
}

impl Status {
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Self::default()
        }
    }

    /// The operator report as a string. See the [`fmt::Display`] impl for
    /// the layout.
    pub fn repr(&self) -> String {
        self.to_string()
    }
}

impl Tracer for Status {
    fn start(&mut self, num_pods: usize) {
        self.num_pods = num_pods;
    }

    fn add(&mut self, namespace: &str, name: &str) {
        self.pods.push(NamespacedName::new(namespace, name));
    }

    fn sign(&mut self, computed: &str) {
        self.fingerprint_computed = computed.to_string();
    }

    fn check(&mut self, expected: &str) {
        self.fingerprint_expected = expected.to_string();
    }
}

impl fmt::Display for Status {
    /// Replayable operator report:
    ///
    /// ```text
    /// > processing node "node-name"
    /// > processing N pods
    /// + namespace/name
    /// = computedSignature
    /// V expectedSignature
    /// ```
    ///
    /// The pod count is the hint announced via `start`, not the final count.
    /// The verdict line appears only once a check happened: `V` when the
    /// signatures agree, `X` when they do not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "> processing node {:?}", self.node_name)?;
        writeln!(f, "> processing {} pods", self.num_pods)?;
        for pod in &self.pods {
            writeln!(f, "+ {pod}")?;
        }
        writeln!(f, "= {}", self.fingerprint_computed)?;
        if !self.fingerprint_expected.is_empty() {
            let verdict = if self.fingerprint_expected == self.fingerprint_computed {
                'V'
            } else {
                'X'
            };
            writeln!(f, "{} {}", verdict, self.fingerprint_expected)?;
        }
        Ok(())
    }
}
