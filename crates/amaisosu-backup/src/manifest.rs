//! Entries the OpenSauce installer and the HAC2 loader are known to create
//! directly under the installation root.

/// Directories created by the OpenSauce installer.
pub const KNOWN_DIRECTORIES: [&str; 5] = ["data", "MaxScripts", "shaders", "tags", "OpenSauceIDE"];

/// Files created by the OpenSauce installer.
pub const KNOWN_FILES: [&str; 22] = [
    "CheApe.map",
    "CrashSender1401.exe",
    "msvcp120.dll",
    "OS_Sapien.exe",
    "CheApeDLLG.dll",
    "dbghelp.dll",
    "msvcr100.dll",
    "OS_Settings.Editor.xml",
    "CheApeDLLS.dll",
    "dinput8.dll",
    "msvcr120.dll",
    "OS_Tool.exe",
    "CheApeDLLT.dll",
    "Halo1_CE_Readme.txt",
    "OpenSauceDedi.dll",
    "vccorlib120.dll",
    "crashrpt_lang.ini",
    "Halo1_CheApe_Readme.txt",
    "OS_Guerilla.exe",
    "CrashRpt1401.dll",
    "msvcp100.dll",
    "OS_haloceded.exe",
];

/// Directory holding the HAC2 loader, relative to the installation root.
pub const AUXILIARY_LOADER_DIR: &str = "controls";

/// HAC2 loader file name. Also its flattened name inside the backup directory.
pub const AUXILIARY_LOADER_FILE: &str = "loader.dll";

pub const BACKUP_DIR_PREFIX: &str = "AmaiSosu.Backup.";
