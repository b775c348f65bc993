//! Cost Catalogue (SPEC_FULL.md §4.1): immutable opcode/name → weight
//! tables, one per language version.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A supported catalogue version. New versions are added here and in
/// [`Catalogue::new`]; nothing else in the crate switches on version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    V2,
    V3,
}

/// Immutable opcode/name cost tables for one language version.
///
/// Built once via [`Catalogue::new`]/[`Catalogue::v2`]/[`Catalogue::v3`] and
/// shared by reference thereafter — never mutated after construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalogue {
    native: HashMap<i16, i64>,
    user: HashMap<String, i64>,
}

impl Catalogue {
    pub fn new(version: Version) -> Catalogue {
        match version {
            Version::V2 => Self::v2(),
            Version::V3 => Self::v3(),
        }
    }

    /// Look up a native opcode's cost. `None` on miss (surfaced by the
    /// estimator as `ErrorKind::UnknownNativeFunction`).
    pub fn native_cost(&self, opcode: i16) -> Option<i64> {
        self.native.get(&opcode).copied()
    }

    /// Look up a user/builtin function's cost by name. `None` on miss
    /// (surfaced by the estimator as `ErrorKind::UnknownUserFunction`).
    pub fn user_cost(&self, name: &str) -> Option<i64> {
        self.user.get(name).copied()
    }

    pub fn v2() -> Catalogue {
        let mut native = HashMap::new();
        for op in [0, 1, 2] {
            native.insert(op, 1);
        }
        for op in 100..=107 {
            native.insert(op, 1);
        }
        for op in [200, 201, 202] {
            native.insert(op, 1);
        }
        native.insert(203, 10);
        native.insert(300, 10);
        for op in [303, 304, 305] {
            native.insert(op, 1);
        }
        for op in [400, 401] {
            native.insert(op, 2);
        }
        for op in [410, 411, 412] {
            native.insert(op, 1);
        }
        for op in [420, 421] {
            native.insert(op, 1);
        }
        native.insert(500, 100);
        for op in [501, 502, 503] {
            native.insert(op, 10);
        }
        for op in 600..=603 {
            native.insert(op, 10);
        }
        for op in [1000, 1001, 1003] {
            native.insert(op, 100);
        }
        for op in 1040..=1043 {
            native.insert(op, 10);
        }
        for op in 1050..=1053 {
            native.insert(op, 100);
        }
        native.insert(1060, 100);

        let mut user = HashMap::new();
        for (name, cost) in [
            ("throw", 2),
            ("addressFromString", 124),
            ("!=", 26),
            ("isDefined", 35),
            ("extract", 13),
            ("dropRightBytes", 19),
            ("takeRightBytes", 19),
            ("takeRight", 19),
            ("dropRight", 19),
            ("!", 11),
            ("-", 9),
            ("getInteger", 10),
            ("getBoolean", 10),
            ("getBinary", 10),
            ("getString", 10),
            ("addressFromPublicKey", 82),
            ("wavesBalance", 109),
            ("Address", 1),
            ("Alias", 1),
            ("DataEntry", 2),
        ] {
            user.insert(name.to_string(), cost);
        }

        Catalogue { native, user }
    }

    /// `V3` = `V2`'s tables, plus this documented diff: additions, then
    /// overrides. The two versions can never silently diverge because V3 is
    /// always derived from V2, not hand-duplicated.
    pub fn v3() -> Catalogue {
        let mut catalogue = Self::v2();

        for op in [108, 109] {
            catalogue.native.insert(op, 100);
        }
        catalogue.native.insert(504, 300);
        for op in [604, 605] {
            catalogue.native.insert(op, 10);
        }
        for op in [1004, 1005, 1006] {
            catalogue.native.insert(op, 100);
        }
        catalogue.native.insert(700, 30);
        catalogue.native.insert(1061, 10);
        catalogue.native.insert(1070, 100);
        catalogue.native.insert(1100, 2);
        catalogue.native.insert(1200, 20);
        for op in [1201, 1202] {
            catalogue.native.insert(op, 10);
        }
        for op in [1203, 1204] {
            catalogue.native.insert(op, 20);
        }
        catalogue.native.insert(1205, 100);
        for op in [1206, 1207, 1208] {
            catalogue.native.insert(op, 20);
        }

        for name in [
            "Ceiling", "Floor", "HalfEven", "Down", "Up", "HalfUp", "HalfDown", "NoAlg", "Md5",
            "Sha1", "Sha224", "Sha256", "Sha384", "Sha512", "Sha3224", "Sha3256", "Sha3384",
            "Sha3512", "Unit",
        ] {
            catalogue.user.insert(name.to_string(), 0);
        }
        for op in 1040..=1043 {
            catalogue
                .user
                .insert(format!("@extrNative({op})"), 10);
        }
        for op in 1050..=1053 {
            catalogue
                .user
                .insert(format!("@extrNative({op})"), 100);
        }
        for name in ["getInteger", "getBoolean", "getBinary", "getString"] {
            catalogue
                .user
                .insert(format!("@extrUser({name})"), 10);
        }
        catalogue
            .user
            .insert("@extrUser(addressFromString)".to_string(), 124);
        catalogue.user.insert("parseIntValue".to_string(), 20);
        catalogue.user.insert("value".to_string(), 13);
        catalogue
            .user
            .insert("valueOrErrorMessage".to_string(), 13);

        for (name, cost) in [("throw", 1), ("isDefined", 1), ("!=", 1), ("!", 1), ("-", 1)] {
            catalogue.user.insert(name.to_string(), cost);
        }

        catalogue
    }
}

/// Free-function form matching the spec's §6 consumer-side naming.
pub fn new_catalogue_v2() -> Catalogue {
    Catalogue::v2()
}

/// Free-function form matching the spec's §6 consumer-side naming.
pub fn new_catalogue_v3() -> Catalogue {
    Catalogue::v3()
}
