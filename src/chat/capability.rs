use serde::Serialize;

/// A decorative entry in the capability bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const CAPABILITIES: [Capability; 5] = [
    Capability {
        name: "Problem Solving",
        icon: "💡",
        description: "Creative solutions to complex problems",
    },
    Capability {
        name: "Code Generation",
        icon: "💻",
        description: "Write, debug, and explain code",
    },
    Capability {
        name: "Calculations",
        icon: "🧮",
        description: "Math, data analysis, and computations",
    },
    Capability {
        name: "Research",
        icon: "🔍",
        description: "Information gathering and analysis",
    },
    Capability {
        name: "Translation",
        icon: "🌐",
        description: "Multi-language support",
    },
];
