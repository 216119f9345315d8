//! Command names offered for completion.
//!
//! Order matters: results keep dictionary order, so Glaze's own commands
//! come first. Some names appear more than once and are de-duplicated when
//! suggestions are built.

/// Built-in command names followed by the host command catalog, common
/// utilities, developer tools, shells and help.
#[rustfmt::skip]
pub const COMMAND_DICTIONARY: &[&str] = &[
    // glaze
    "cmds", "cls", "quit", "version", "system", "settings", "time", "clear", "new",
    // a
    "append", "arp", "assoc", "at", "atmadm", "attrib", "auditpol", "autoconv", "autofmt",
    // b
    "bcdboot", "bcdedit", "bdehdcfg", "bitsadmin", "bootcfg", "break", "bulkadmin",
    // c
    "cacls", "call", "cd", "certreq", "certutil", "change", "chcp", "chdir",
    "checknetisolation", "chglogon", "chgport", "chgusr", "chkdsk", "chkntfs", "choice",
    "cipher", "clean", "cleanmgr", "clip", "cls", "cmd", "cmdkey", "color", "comp",
    "compact", "convert", "copy", "cprofile", "csencrypt", "cscript", "csvde", "ctty",
    // d
    "date", "dcdiag", "dcgpofix", "dcomcnfg", "defrag", "del", "dfsradmin", "dfsrdiag",
    "dfsrmig", "diantz", "dir", "diskcomp", "diskcopy", "diskpart", "diskperf", "diskraid",
    "dism", "dispdiag", "dnscmd", "doskey", "driverquery", "dsacls", "dsadd", "dsget",
    "dsmod", "dsmove", "dsquery", "dsrm", "dvedit", "dxdiag",
    // e
    "echo", "edit", "edlin", "efsrecover", "endlocal", "erase", "eventcreate", "eventquery",
    "eventtriggers", "evntcmd", "exe2bin", "exit", "expand", "explorer",
    // f
    "fc", "fdisk", "find", "findstr", "finger", "flattemp", "fondue", "for", "forfiles",
    "format", "fp", "freedisk", "fsutil", "ftp", "ftype", "fveupdate",
    // g
    "getmac", "gettype", "global", "goto", "gpfixup", "gpresult", "gpupdate", "graftabl",
    "graphics",
    // h
    "help", "hostname",
    // i
    "iCACLS", "iexpress", "if", "inuse", "ipconfig", "ipxroute", "irftp", "iscsicli",
    "iscsicpl",
    // j
    "jetpack", "join",
    // k
    "klist", "ksetup", "ktmutil", "ktpass",
    // l
    "label", "lodctr", "logman", "logoff", "lpq", "lpr",
    // m
    "macfile", "makecab", "manage-bde", "mapadmin", "md", "mkdir", "mklink", "mmc", "mode",
    "more", "mount", "mountvol", "move", "mqbkup", "mqsvc", "mqtgsvc", "msdt", "msg",
    "msiexec", "msinfo32", "mstsc",
    // n
    "nbtstat", "net", "net1", "netcfg", "netsh", "netstat", "nfsadmin", "nfsshare",
    "nfsstat", "nlbmgr", "nltest", "nslookup", "ntbackup", "ntcmdprompt", "ntdsutil",
    "ntfrsutl",
    // o
    "openfiles",
    // p
    "pagefileconfig", "path", "pathping", "pause", "pbadmin", "pentnt", "perfmon", "ping",
    "pkgmgr", "pnpunattend", "pnputil", "popd", "powercfg", "print", "prncnfg", "prndrvr",
    "prnjobs", "prnmngr", "prnport", "prnqctl", "prompt", "pubprn", "pushd", "pwlauncher",
    // q
    "qappsrv", "qprocess", "query", "quser", "qwinsta",
    // r
    "rasautou", "rasdial", "rcp", "rd", "rdpsign", "recover", "reg", "regini", "regsvr32",
    "relog", "rem", "ren", "rename", "repair-bde", "replace", "reset", "restore", "rexec",
    "risetup", "rmdir", "robocopy", "route", "rpcinfo", "rpcping", "rsh", "rundll32",
    "rwinsta",
    // s
    "sc", "schtasks", "sdbinst", "secedit", "set", "setlocal", "setspn", "setx", "sfc",
    "shadow", "share", "shift", "showmount", "shutdown", "sort", "start", "subst",
    "sxstrace", "sysocmgr", "systeminfo",
    // t
    "takeown", "tapicfg", "taskkill", "tasklist", "tcmsetup", "telnet", "tftp", "time",
    "timeout", "title", "tlntadmn", "tpmvscmgr", "tracerpt", "tracert", "tree", "tscon",
    "tsdiscon", "tsecimp", "tskill", "tsprof", "type", "typeperf", "tzutil",
    // u
    "umount", "undelete", "unlodctr",
    // v
    "ver", "verify", "vol", "vssadmin",
    // w
    "w32tm", "waitfor", "wbadmin", "wdsutil", "wevtutil", "where", "whoami", "winmgmt",
    "winrm", "winrs", "winsat", "wlbs", "wmic", "wscript",
    // x
    "xcopy",
    // utilities
    "calc", "notepad", "explorer", "control", "mspaint", "wordpad", "write", "msconfig",
    "msinfo32", "devmgmt.msc", "diskmgmt.msc", "eventvwr.msc", "services.msc", "taskmgr",
    "regedit", "appwiz.cpl", "inetcpl.cpl", "ncpa.cpl", "sysdm.cpl", "timedate.cpl",
    "firewall.cpl", "powercfg.cpl",
    // dev tools
    "git", "npm", "node", "npx", "python", "py", "pip", "pip3", "code", "dotnet", "java",
    "javac", "gcc", "g++", "cmake", "make",
    // shells
    "powershell", "pwsh",
    // help
    "help", "/?", "?",
];
