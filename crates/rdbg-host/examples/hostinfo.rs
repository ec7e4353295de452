//! Example dumping the host facts the debugger relies on
//!
//! Run with `RUST_LOG=debug` to see the install-directory derivation events
//! on the `host` target.

use rdbg_host::{HostInfo, PosixHostInfo};
use rdbg_utils::init_logging;

fn main()
{
    init_logging().expect("Failed to initialize logging");

    let host = PosixHostInfo::new();

    println!("page size:  {}", host.page_size());
    match host.hostname() {
        Ok(name) => println!("hostname:   {name}"),
        Err(err) => println!("hostname:   <unavailable: {err}>"),
    }

    let uid = host.user_id();
    let gid = host.group_id();
    let user = host.resolver().user_name(uid).unwrap_or_else(|| uid.to_string());
    let group = host.resolver().group_name(gid).unwrap_or_else(|| gid.to_string());
    println!("user:       {user} (uid {uid}, euid {})", host.effective_user_id());
    println!("group:      {group} (gid {gid}, egid {})", host.effective_group_id());

    println!("shell:      {}", host.default_shell().display());
    println!("HOME:       {}", host.env_var("HOME").unwrap_or_else(|| "<unset>".to_string()));

    match host.support_exe_dir() {
        Ok(dir) => println!("bin dir:    {}", dir.display()),
        Err(err) => println!("bin dir:    <underivable: {err}>"),
    }
    match host.header_dir() {
        Ok(dir) => println!("header dir: {}", dir.display()),
        Err(err) => println!("header dir: <underivable: {err}>"),
    }
}
