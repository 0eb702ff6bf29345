use crate::events::Command;
use crate::sys::SOCKET_PATH;
use std::io::Write;
use std::os::unix::net::UnixStream;

pub fn send_command(cmd: Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to dotpage demo at {}: {}. Is it running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    Ok(())
}
