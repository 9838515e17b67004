//! Workspace root package.
//!
//! Exists so workspace-level tooling such as the `rusty-hook` pre-commit hook
//! has a package to attach to. The library lives in `crates/ecoflight-lib`
//! and the command-line tool in `crates/ecoflight-cli`.
