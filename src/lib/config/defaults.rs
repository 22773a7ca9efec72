pub const DEFAULT_WELCOME_TITLE: &str = "Selamat datang! 👋";
pub const DEFAULT_WELCOME_BODY: &str =
    "Saya adalah AI assistant yang siap membantu Anda. Silakan tanyakan apapun!";
pub const DEFAULT_ERROR_PREFIX: &str = "Maaf, terjadi kesalahan: ";
pub const DEFAULT_CONNECTION_FALLBACK: &str = "Maaf, tidak dapat terhubung ke server.";
pub const DEFAULT_RESET_CONFIRM: &str = "Yakin ingin menghapus riwayat chat?";
pub const DEFAULT_RESET_FAILED: &str = "Gagal mereset chat.";
