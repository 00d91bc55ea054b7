//! The fixed catalogue of resting-state networks.
//!
//! Subject files carry 32 ICA components; analysis uses the 14 resting-state
//! networks (RSNs) listed here, in display order. Positions 0..13 in every
//! correlation matrix and graph frame follow this order.

/// Number of analysis channels (one per RSN).
pub const CHANNEL_COUNT: usize = 14;

/// Number of ICA components in a raw subject file.
pub const SOURCE_COLUMNS: usize = 32;

/// One resting-state network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// ICA component index in the source file (1-based).
    index: usize,
    long_name: &'static str,
    short_name: &'static str,
    /// Alternative spellings seen in upstream datasets.
    nicknames: &'static [&'static str],
}

impl Network {
    /// Returns the 1-based ICA component index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the full display name.
    pub fn long_name(&self) -> &'static str {
        self.long_name
    }

    /// Returns the short label used as node id.
    pub fn short_name(&self) -> &'static str {
        self.short_name
    }

    /// Returns alternative spellings of the short label.
    pub fn nicknames(&self) -> &'static [&'static str] {
        self.nicknames
    }
}

/// The 14 RSNs in display order (position 0..13).
pub const NETWORKS: [Network; CHANNEL_COUNT] = [
    Network {
        index: 1,
        long_name: "Anterior Default Mode Network",
        short_name: "aDMN",
        nicknames: &[],
    },
    Network {
        index: 2,
        long_name: "Primary Visual Network",
        short_name: "V1",
        nicknames: &[],
    },
    Network {
        index: 5,
        long_name: "Salience Network",
        short_name: "SAL",
        nicknames: &[],
    },
    Network {
        index: 6,
        long_name: "Posterior Default Mode Network",
        short_name: "pDMN",
        nicknames: &[],
    },
    Network {
        index: 7,
        long_name: "Auditory Network",
        short_name: "AUD",
        nicknames: &["AUDI"],
    },
    Network {
        index: 9,
        long_name: "Left Frontoparietal Network",
        short_name: "lFPN",
        nicknames: &["FPL"],
    },
    Network {
        index: 12,
        long_name: "Right Frontoparietal Network",
        short_name: "rFPN",
        nicknames: &["FPR"],
    },
    Network {
        index: 13,
        long_name: "Lateral Visual Network",
        short_name: "latVIS",
        nicknames: &[],
    },
    Network {
        index: 14,
        long_name: "Lateral Sensorimotor Network",
        short_name: "latSM",
        nicknames: &[],
    },
    Network {
        index: 15,
        long_name: "Cerebellum Network",
        short_name: "CER",
        nicknames: &["Cereb", "CEREB"],
    },
    Network {
        index: 18,
        long_name: "Primary Sensorimotor Network",
        short_name: "SM1",
        nicknames: &["SMN"],
    },
    Network {
        index: 19,
        long_name: "Dorsal Attention Network",
        short_name: "DAN",
        nicknames: &[],
    },
    Network {
        index: 21,
        long_name: "Language Network",
        short_name: "LANG",
        nicknames: &[],
    },
    Network {
        index: 27,
        long_name: "Occipital Visual Network",
        short_name: "occVIS",
        nicknames: &[],
    },
];

/// Returns the short labels in display order.
pub fn short_labels() -> Vec<String> {
    NETWORKS.iter().map(|n| n.short_name.to_string()).collect()
}

/// Returns the long names in display order.
pub fn long_labels() -> Vec<String> {
    NETWORKS.iter().map(|n| n.long_name.to_string()).collect()
}

/// Looks up the display position (0..13) of a network by short name, long
/// name, or nickname. Returns `None` for unknown names.
pub fn position_of(name: &str) -> Option<usize> {
    NETWORKS.iter().position(|n| {
        n.short_name == name || n.long_name == name || n.nicknames.contains(&name)
    })
}
