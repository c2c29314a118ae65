use ethers::types::Address;
use expanded_pathbuf::ExpandedPathBuf;
use pin_utils::pin_mut;
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, future::Future, io, str::FromStr, time::Duration};
use tracing::info;

/// Parses address from string
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("String {s} is not a valid address"))
}

/// Parses a duration given in whole seconds
pub fn parse_duration(duration: &str) -> Result<Duration, String> {
    let seconds: u64 = duration.parse().map_err(|_| format!("{duration} must be unsigned int"))?;
    Ok(Duration::from_secs(seconds))
}

/// Reads a JSON document from `path`
pub fn read_json<T: DeserializeOwned>(path: &ExpandedPathBuf) -> eyre::Result<T> {
    let content = fs::read_to_string(path)
        .map_err(|err| eyre::eyre!("Failed to read {}: {err}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|err| eyre::eyre!("Failed to parse {}: {err}", path.display()))
}

/// Prints `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Error returned when the command is interrupted by `signal`
pub fn interrupted(signal: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, format!("interrupted by {signal}"))
}

/// Runs the future to completion, failing with [interrupted] if:
/// - `ctrl-c` is received.
/// - `SIGTERM` is received (unix only).
pub async fn run_until_ctrl_c<F, T, E>(fut: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Send + Sync + 'static + From<io::Error>,
{
    let ctrl_c = tokio::signal::ctrl_c();

    let mut stream = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let sigterm = stream.recv();
    pin_mut!(sigterm, ctrl_c, fut);

    tokio::select! {
        _ = ctrl_c => {
            info!("Received ctrl-c signal.");
            Err(interrupted("ctrl-c").into())
        },
        _ = sigterm => {
            info!("Received SIGTERM signal.");
            Err(interrupted("SIGTERM").into())
        },
        res = fut => res,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bundler_client_primitives::StateOverride;
    use std::{env, path::PathBuf};

    #[test]
    fn parses_address() {
        assert_eq!(
            parse_address("0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789").unwrap(),
            Address::from_str("0x5ff137d4b0fdcd49dca30c7cf57e578a026d2789").unwrap()
        );
        assert!(parse_address("0x1234").is_err());
    }

    #[test]
    fn parses_duration_in_seconds() {
        assert_eq!(parse_duration("30").unwrap(), Duration::from_secs(30));
        assert!(parse_duration("-1").is_err());
        assert!(parse_duration("1.5").is_err());
    }

    #[test]
    fn reads_json_file() {
        let path = env::temp_dir().join(format!("bundler-client-overrides-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{"0x9c5754de1443984659e1b3a8d1931d83475ba29c":{"balance":"0xde0b6b3a7640000"}}"#,
        )
        .unwrap();

        let overrides: StateOverride = read_json(&ExpandedPathBuf(path.clone())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(overrides.len(), 1);

        let missing = ExpandedPathBuf(PathBuf::from("/nonexistent/bundler-client.json"));
        assert!(read_json::<StateOverride>(&missing).is_err());
    }

    #[tokio::test]
    async fn command_result_passes_through() {
        let res = run_until_ctrl_c(async { Ok::<_, eyre::Report>(137u64) }).await;
        assert_eq!(res.unwrap(), 137);

        let res = run_until_ctrl_c(async { Err::<(), _>(eyre::eyre!("bundler unreachable")) }).await;
        assert_eq!(res.unwrap_err().to_string(), "bundler unreachable");
    }

    #[test]
    fn interruption_is_an_error() {
        let err = eyre::Report::from(interrupted("ctrl-c"));
        assert_eq!(err.to_string(), "interrupted by ctrl-c");
        assert_eq!(
            err.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::Interrupted)
        );
    }
}
