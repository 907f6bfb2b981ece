use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Enable timestamped logging.
    #[clap(short, long)]
    pub ts: bool,
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// `default` is the verbosity used when no `-v` flags are given.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let log_level = match self.level(default) {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }

    fn level(
        &self,
        default: u8,
    ) -> u8 {
        if let Some(verbose) = self.verbose
            && verbose > 0
        {
            verbose
        } else {
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_args(verbose: Option<u8>) -> LogArgs {
        LogArgs {
            quiet: false,
            verbose,
            ts: false,
        }
    }

    #[test]
    fn test_level() {
        assert_eq!(log_args(None).level(3), 3);
        assert_eq!(log_args(Some(0)).level(2), 2);
        assert_eq!(log_args(Some(4)).level(2), 4);
    }
}
