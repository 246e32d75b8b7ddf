//! Closed enumerations of the ATT&CK object model.
//!
//! Each enum knows its wire names so the same list backs both typed
//! deserialization and the enumerated-tag field rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownTypeError;

macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire names of every variant, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($tag),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($tag => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum! {
    /// STIX object type tags with a registered schema.
    StixType {
        AttackPattern => "attack-pattern",
        Campaign => "campaign",
        CourseOfAction => "course-of-action",
        Identity => "identity",
        IntrusionSet => "intrusion-set",
        Malware => "malware",
        MarkingDefinition => "marking-definition",
        Relationship => "relationship",
        Tool => "tool",
        Collection => "x-mitre-collection",
        DataComponent => "x-mitre-data-component",
        DataSource => "x-mitre-data-source",
        Tactic => "x-mitre-tactic",
    }
}

impl FromStr for StixType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StixType::from_name(s).ok_or_else(|| UnknownTypeError(s.to_string()))
    }
}

closed_enum! {
    /// ATT&CK domains.
    Domain {
        Enterprise => "enterprise-attack",
        Mobile => "mobile-attack",
        Ics => "ics-attack",
    }
}

closed_enum! {
    /// Platforms an ATT&CK object may apply to.
    Platform {
        FieldController => "Field Controller/RTU/PLC/IED",
        NetworkDevices => "Network Devices",
        DataHistorian => "Data Historian",
        GoogleWorkspace => "Google Workspace",
        OfficeSuite => "Office Suite",
        Esxi => "ESXi",
        IdentityProvider => "Identity Provider",
        Containers => "Containers",
        AzureAd => "Azure AD",
        EngineeringWorkstation => "Engineering Workstation",
        ControlServer => "Control Server",
        HumanMachineInterface => "Human-Machine Interface",
        Windows => "Windows",
        Linux => "Linux",
        Iaas => "IaaS",
        Unspecified => "None",
        Ios => "iOS",
        Pre => "PRE",
        Saas => "SaaS",
        InputOutputServer => "Input/Output Server",
        MacOs => "macOS",
        Android => "Android",
        SafetyInstrumentedSystem => "Safety Instrumented System/Protection Relay",
        Embedded => "Embedded",
        Office365 => "Office 365",
        Network => "Network",
    }
}

closed_enum! {
    /// Where a data source's telemetry is collected.
    CollectionLayer {
        CloudControlPlane => "Cloud Control Plane",
        Host => "Host",
        Report => "Report",
        Container => "Container",
        Device => "Device",
        Osint => "OSINT",
        Network => "Network",
    }
}

closed_enum! {
    RelationshipType {
        Uses => "uses",
        Mitigates => "mitigates",
        SubtechniqueOf => "subtechnique-of",
        Detects => "detects",
        AttributedTo => "attributed-to",
        RevokedBy => "revoked-by",
    }
}

closed_enum! {
    IdentityClass {
        Individual => "individual",
        Group => "group",
        System => "system",
        Organization => "organization",
        Class => "class",
        Unknown => "unknown",
    }
}

closed_enum! {
    /// Kill chains used by ATT&CK technique phases.
    KillChainName {
        Enterprise => "mitre-attack",
        Mobile => "mitre-mobile-attack",
        Ics => "mitre-ics-attack",
    }
}
