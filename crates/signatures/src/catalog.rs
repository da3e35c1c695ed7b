//! Signature catalog: the ordered table of composite service signatures
//!
//! The built-in table is compiled in; a replacement can be loaded from a JSON
//! array of `{ "name", "required", "optional" }` objects. Either way the
//! catalog goes through `validate()` once before it is used for matching.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use nsight_common::{NsightError, NsightResult, Port, Signature};

/// (name, required, optional)
type Entry = (&'static str, &'static [Port], &'static [Port]);

/// Built-in signatures, reported in this order.
const BUILTIN_ENTRIES: &[Entry] = &[
    ("SMB / NetBIOS file share", &[139, 445], &[]),
    (
        "Active Directory Domain Controller",
        &[53, 88, 389, 445, 464],
        &[636, 3268, 3269, 5985, 9389],
    ),
    ("Windows RPC services (EPM + dynamic RPC)", &[135], &[]),
    ("Windows Remote Management / WinRM", &[5985], &[5986]),
    ("NFS server (rpcbind + nfsd)", &[111, 2049], &[20048, 4045, 4049]),
    ("FTP", &[21], &[20]),
    ("Mail stack (SMTP + POP)", &[25, 110], &[]),
    ("Mail stack (SMTP + IMAP)", &[25, 143], &[]),
    ("Mail stack (SMTP + IMAPS)", &[25, 993], &[]),
    ("SIP / VoIP server", &[5060], &[]),
    ("Network printer (JetDirect + LPD)", &[515, 9100], &[]),
    ("Oracle Database", &[1521], &[1522, 2483, 2484]),
    ("MySQL / MariaDB", &[3306], &[33060]),
    ("Microsoft SQL Server", &[1433], &[]),
    ("PostgreSQL", &[5432], &[5433]),
    // Db2 listens on a whole range above 50000; only the bounds are listed.
    ("IBM Db2 Database", &[50000], &[50001, 50050]),
    (
        "SAP NetWeaver Application Server",
        &[3200, 3300],
        &[3600, 8000, 8001, 3299],
    ),
    ("Elasticsearch", &[9200], &[9300]),
    // TODO: add syslog on UDP/514 once signatures can carry UDP ports.
    ("Splunk Enterprise", &[8000, 8089, 9997], &[8088]),
    ("VMware vCenter Server", &[443], &[5480, 902]),
    ("MongoDB Database", &[27017], &[27018, 27019]),
    ("Redis", &[6379], &[26379, 16379]),
    ("Apache Cassandra", &[9042], &[7000, 9160]),
];

static BUILTIN: Lazy<SignatureCatalog> = Lazy::new(|| SignatureCatalog {
    signatures: BUILTIN_ENTRIES
        .iter()
        .map(|(name, required, optional)| {
            Signature::new(*name, required.iter().copied())
                .with_optional(optional.iter().copied())
        })
        .collect(),
});

/// Ordered, read-only list of signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureCatalog {
    signatures: Vec<Signature>,
}

impl SignatureCatalog {
    /// Wrap signatures as-is; call `validate()` before matching.
    #[must_use]
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    /// The compiled-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json_str(json: &str) -> NsightResult<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        debug!("Parsed {} signature(s) from JSON", catalog.len());
        Ok(catalog)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> NsightResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(|e| match e {
            NsightError::Json(err) => {
                NsightError::Catalog(format!("{}: {}", path.display(), err))
            }
            other => other,
        })
    }

    /// Reject catalogs that would produce meaningless matches.
    pub fn validate(&self) -> NsightResult<()> {
        if self.signatures.is_empty() {
            return Err(NsightError::Catalog("catalog has no signatures".to_string()));
        }

        for sig in &self.signatures {
            if sig.name.trim().is_empty() {
                return Err(NsightError::invalid_signature(
                    &sig.name,
                    "name must not be empty",
                ));
            }
            if sig.required.is_empty() {
                return Err(NsightError::invalid_signature(
                    &sig.name,
                    "at least one required port is needed",
                ));
            }
            if sig.required.contains(&0) || sig.optional.contains(&0) {
                return Err(NsightError::invalid_signature(&sig.name, "port 0 is not valid"));
            }
            if let Some(port) = sig.required.intersection(&sig.optional).next() {
                return Err(NsightError::invalid_signature(
                    &sig.name,
                    format!("port {} is both required and optional", port),
                ));
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Signature> {
        self.signatures.iter()
    }
}

impl Default for SignatureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a SignatureCatalog {
    type Item = &'a Signature;
    type IntoIter = std::slice::Iter<'a, Signature>;

    fn into_iter(self) -> Self::IntoIter {
        self.signatures.iter()
    }
}
