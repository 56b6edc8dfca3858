use std::path::PathBuf;

/// Get the app data directory for the current platform
pub fn get_app_data_dir() -> PathBuf {
    #[cfg(target_os = "android")]
    {
        for dir in [
            "/data/user/0/dev.blogport.app/files",
            "/data/data/dev.blogport.app/files",
        ] {
            let path = PathBuf::from(dir);
            if path.exists() {
                return path;
            }
        }
        PathBuf::from("./data")
    }

    #[cfg(not(target_os = "android"))]
    {
        // On desktop, use ./data directory
        PathBuf::from("./data")
    }
}
