//! Check subcommands

use clap::{Args, Subcommand};
use probe_checks::disk::DEFAULT_MOUNT;
use probe_checks::etcd;
use probe_checks::{
    Check, CheckConfigResult, CpuCheck, DiskCheck, EtcdCheck, LoadCheck, MemoryCheck,
    ServiceFilter, ServicesCheck,
};

/// Available checks
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check CPU usage
    Cpu(PercentArgs),

    /// Check memory usage
    Memory(PercentArgs),

    /// Check disk usage
    Disk(DiskArgs),

    /// Check Talos system service health
    Services(ServicesArgs),

    /// Check etcd cluster health
    Etcd(EtcdArgs),

    /// Check load average
    Load(LoadArgs),
}

/// Warning and critical ranges for a percentage
#[derive(Debug, Args)]
pub struct PercentArgs {
    /// Warning threshold (Nagios range, %)
    #[arg(short, long, default_value = "80", allow_hyphen_values = true)]
    pub warning: String,

    /// Critical threshold (Nagios range, %)
    #[arg(short, long, default_value = "90", allow_hyphen_values = true)]
    pub critical: String,
}

#[derive(Debug, Args)]
pub struct DiskArgs {
    #[command(flatten)]
    pub thresholds: PercentArgs,

    /// Mount point to check
    #[arg(short, long, default_value = DEFAULT_MOUNT)]
    pub mount: String,
}

#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Only check these service IDs (repeatable)
    #[arg(long, value_name = "ID")]
    pub include: Vec<String>,

    /// Service IDs to ignore (repeatable)
    #[arg(long, value_name = "ID")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Args)]
pub struct EtcdArgs {
    /// Warning threshold for DB size in bytes
    #[arg(short, long, default_value = etcd::DEFAULT_WARNING, allow_hyphen_values = true)]
    pub warning: String,

    /// Critical threshold for DB size in bytes
    #[arg(short, long, default_value = etcd::DEFAULT_CRITICAL, allow_hyphen_values = true)]
    pub critical: String,

    /// Minimum expected etcd member count
    #[arg(long, default_value_t = etcd::DEFAULT_MIN_MEMBERS as i64, allow_hyphen_values = true)]
    pub min_members: i64,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Warning threshold (raw load average; defaults to the CPU count)
    #[arg(short, long, allow_hyphen_values = true)]
    pub warning: Option<String>,

    /// Critical threshold (raw load average; defaults to twice the CPU count)
    #[arg(short, long, allow_hyphen_values = true)]
    pub critical: Option<String>,

    /// Load average period: 1, 5, or 15 (minutes)
    #[arg(long, default_value = "5")]
    pub period: String,
}

impl Commands {
    /// Uppercase check name for the status line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Cpu(_) => CpuCheck::NAME,
            Commands::Memory(_) => MemoryCheck::NAME,
            Commands::Disk(_) => DiskCheck::NAME,
            Commands::Services(_) => ServicesCheck::NAME,
            Commands::Etcd(_) => EtcdCheck::NAME,
            Commands::Load(_) => LoadCheck::NAME,
        }
    }

    /// Validate the flags and configure the check.
    pub fn build(self) -> CheckConfigResult<Check> {
        let check: Check = match self {
            Commands::Cpu(args) => CpuCheck::new(&args.warning, &args.critical)?.into(),
            Commands::Memory(args) => MemoryCheck::new(&args.warning, &args.critical)?.into(),
            Commands::Disk(args) => DiskCheck::new(
                &args.thresholds.warning,
                &args.thresholds.critical,
                &args.mount,
            )?
            .into(),
            Commands::Services(args) => {
                ServicesCheck::new(ServiceFilter::from_lists(args.include, args.exclude)?).into()
            }
            Commands::Etcd(args) => {
                EtcdCheck::new(&args.warning, &args.critical, args.min_members)?.into()
            }
            Commands::Load(args) => LoadCheck::new(
                args.warning.as_deref(),
                args.critical.as_deref(),
                &args.period,
            )?
            .into(),
        };
        Ok(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_checks::CheckConfigError;

    fn percent(warning: &str, critical: &str) -> PercentArgs {
        PercentArgs {
            warning: warning.into(),
            critical: critical.into(),
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Commands::Cpu(percent("80", "90")).name(), "CPU");
        assert_eq!(
            Commands::Services(ServicesArgs {
                include: vec![],
                exclude: vec![]
            })
            .name(),
            "SERVICES"
        );
    }

    #[test]
    fn test_build_cpu() {
        let check = Commands::Cpu(percent("80", "90")).build().unwrap();
        assert_eq!(check.name(), "CPU");
    }

    #[test]
    fn test_build_rejects_bad_threshold() {
        let err = Commands::Memory(percent("abc", "90")).build().unwrap_err();
        assert!(matches!(err, CheckConfigError::InvalidWarning { .. }));
    }

    #[test]
    fn test_disk_mount_checked_before_thresholds() {
        let err = Commands::Disk(DiskArgs {
            thresholds: percent("abc", "90"),
            mount: "var".into(),
        })
        .build()
        .unwrap_err();
        assert_eq!(err, CheckConfigError::InvalidMount("var".into()));
    }

    #[test]
    fn test_build_services_conflict() {
        let err = Commands::Services(ServicesArgs {
            include: vec!["etcd".into()],
            exclude: vec!["kubelet".into()],
        })
        .build()
        .unwrap_err();
        assert_eq!(err, CheckConfigError::ConflictingFilters);
    }

    #[test]
    fn test_build_etcd_min_members() {
        let err = Commands::Etcd(EtcdArgs {
            warning: etcd::DEFAULT_WARNING.into(),
            critical: etcd::DEFAULT_CRITICAL.into(),
            min_members: 0,
        })
        .build()
        .unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid --min-members "0": must be >= 1"#);
    }

    #[test]
    fn test_build_load_period() {
        let err = Commands::Load(LoadArgs {
            warning: None,
            critical: None,
            period: "10".into(),
        })
        .build()
        .unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid --period "10": must be 1, 5, or 15"#);

        let check = Commands::Load(LoadArgs {
            warning: None,
            critical: Some("8".into()),
            period: "15".into(),
        })
        .build()
        .unwrap();
        assert_eq!(check.name(), "LOAD");
    }
}
