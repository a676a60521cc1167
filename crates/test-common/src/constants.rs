//! Canned tool output used across the test suites.

/// `list available` output: plugin chatter, a header, and two records.
pub const AVAILABLE_LISTING: &str = "\
Loaded plugins: fastestmirror
Available Packages
foo.x86_64  2.0-1  updates
bar.noarch  1.1-3.el5  epel
";

/// `check-update` output with one pending upgrade and one fresh package.
pub const CHECK_UPDATE_LISTING: &str = "\
Loaded plugins: security

bash.x86_64  3.2-33.el5  updates
nspr.x86_64  4.8.6-1.el5  base
";

/// Installed records: a small base system.
pub const RPM_RECORDS_BASE: &str = "\
bash_|-3.2_|-32.el5_|-x86_64
glibc_|-2.5_|-42_|-x86_64
zlib_|-1.2.3_|-3_|-x86_64
";

/// Base system plus `foo` 2.0-1 freshly installed.
pub const RPM_RECORDS_WITH_FOO: &str = "\
bash_|-3.2_|-32.el5_|-x86_64
foo_|-2.0_|-1_|-x86_64
glibc_|-2.5_|-42_|-x86_64
zlib_|-1.2.3_|-3_|-x86_64
";

/// Base system with `bash` upgraded and `nspr` pulled in fresh.
pub const RPM_RECORDS_UPGRADED: &str = "\
bash_|-3.2_|-33.el5_|-x86_64
glibc_|-2.5_|-42_|-x86_64
nspr_|-4.8.6_|-1.el5_|-x86_64
zlib_|-1.2.3_|-3_|-x86_64
";

/// Base system with `zlib` (and nothing else) removed.
pub const RPM_RECORDS_WITHOUT_ZLIB: &str = "\
bash_|-3.2_|-32.el5_|-x86_64
glibc_|-2.5_|-42_|-x86_64
";

/// Base system plus an older `foo` already installed.
pub const RPM_RECORDS_WITH_OLD_FOO: &str = "\
bash_|-3.2_|-32.el5_|-x86_64
foo_|-1.0_|-1_|-x86_64
glibc_|-2.5_|-42_|-x86_64
zlib_|-1.2.3_|-3_|-x86_64
";

/// Base system plus a newer `foo` already installed.
pub const RPM_RECORDS_WITH_NEW_FOO: &str = "\
bash_|-3.2_|-32.el5_|-x86_64
foo_|-3.0_|-1_|-x86_64
glibc_|-2.5_|-42_|-x86_64
zlib_|-1.2.3_|-3_|-x86_64
";
