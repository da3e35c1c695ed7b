//! Report building: run every catalog signature against one port set

use tracing::{debug, trace};

use nsight_common::{MatchOutcome, PortSet, Report};

use crate::catalog::SignatureCatalog;
use crate::matcher::{matches, missing_optional, present_optional};

/// Evaluate `catalog` against `ports`, keeping catalog order.
///
/// An empty port set short-circuits to `Report::NoOpenPorts`; signatures whose
/// required ports are not all open are skipped.
pub fn build_report(ports: &PortSet, catalog: &SignatureCatalog) -> Report {
    if ports.is_empty() {
        debug!("No open ports, skipping {} signature(s)", catalog.len());
        return Report::NoOpenPorts;
    }

    let outcomes: Vec<MatchOutcome> = catalog
        .iter()
        .filter(|sig| {
            let hit = matches(ports, sig);
            trace!(signature = %sig.name, matched = hit, "evaluated signature");
            hit
        })
        .map(|sig| {
            let present = present_optional(ports, &sig.optional);
            let missing = missing_optional(&sig.optional, &present);
            debug!(
                signature = %sig.name,
                present = present.len(),
                missing = missing.len(),
                "signature matched"
            );
            MatchOutcome {
                name: sig.name.clone(),
                required: sig.required.iter().copied().collect(),
                present,
                missing,
            }
        })
        .collect();

    debug!(
        "{} of {} signature(s) matched {} open port(s)",
        outcomes.len(),
        catalog.len(),
        ports.len()
    );

    Report::Evaluated {
        open_ports: ports.sorted(),
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsight_common::{Port, Signature};

    fn ports(list: &[Port]) -> PortSet {
        list.iter().copied().collect()
    }

    #[test]
    fn test_smb_only() {
        let catalog = SignatureCatalog::new(vec![Signature::new("SMB", [139, 445])]);
        let report = build_report(&ports(&[139, 445]), &catalog);

        assert_eq!(
            report.outcomes(),
            &[MatchOutcome {
                name: "SMB".to_string(),
                required: vec![139, 445],
                present: vec![],
                missing: vec![],
            }]
        );
        assert!(!report.outcomes()[0].has_optional());
    }

    #[test]
    fn test_domain_controller_optional_split() {
        let catalog = SignatureCatalog::new(vec![Signature::new("DC", [53, 88, 389, 445, 464])
            .with_optional([636, 3268, 3269, 5985, 9389])]);
        let report = build_report(&ports(&[53, 88, 389, 445, 464, 3268]), &catalog);

        let outcome = &report.outcomes()[0];
        assert_eq!(outcome.required, vec![53, 88, 389, 445, 464]);
        assert_eq!(outcome.present, vec![3268]);
        assert_eq!(outcome.missing, vec![636, 3269, 5985, 9389]);
    }

    #[test]
    fn test_no_signature_matches() {
        let catalog = SignatureCatalog::new(vec![
            Signature::new("SMB", [139, 445]),
            Signature::new("FTP", [21]).with_optional([20]),
        ]);
        let report = build_report(&ports(&[80, 443]), &catalog);
        assert_eq!(
            report,
            Report::Evaluated {
                open_ports: vec![80, 443],
                outcomes: Vec::new(),
            }
        );
    }

    #[test]
    fn test_empty_port_set() {
        let report = build_report(&PortSet::new(), &SignatureCatalog::builtin());
        assert_eq!(report, Report::NoOpenPorts);
    }

    #[test]
    fn test_builtin_web_only_host() {
        // vCenter requires only 443, so it is the single hit for a web host.
        let report = build_report(&ports(&[80, 443]), &SignatureCatalog::builtin());
        let names: Vec<&str> = report.outcomes().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["VMware vCenter Server"]);
        assert_eq!(report.outcomes()[0].missing, vec![902, 5480]);
    }

    #[test]
    fn test_preserves_catalog_order() {
        let catalog = SignatureCatalog::new(vec![
            Signature::new("Redis", [6379]),
            Signature::new("SMB", [139, 445]),
            Signature::new("FTP", [21]),
            Signature::new("MySQL", [3306]),
        ]);
        let report = build_report(&ports(&[21, 139, 445, 6379]), &catalog);
        let names: Vec<&str> = report.outcomes().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Redis", "SMB", "FTP"]);
    }

    #[test]
    fn test_idempotent() {
        let catalog = SignatureCatalog::builtin();
        let open = ports(&[21, 25, 110, 139, 143, 445, 3306, 33060]);
        assert_eq!(build_report(&open, &catalog), build_report(&open, &catalog));
    }

    #[test]
    fn test_builtin_mail_and_file_server() {
        let report = build_report(
            &ports(&[20, 21, 25, 110, 143, 139, 445]),
            &SignatureCatalog::builtin(),
        );
        let names: Vec<&str> = report.outcomes().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "SMB / NetBIOS file share",
                "FTP",
                "Mail stack (SMTP + POP)",
                "Mail stack (SMTP + IMAP)",
            ]
        );
        let ftp = &report.outcomes()[1];
        assert_eq!(ftp.present, vec![20]);
        assert!(ftp.missing.is_empty());
    }
}
