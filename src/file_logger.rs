use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

pub struct FileLogger {
    file: Mutex<std::fs::File>,
}

impl FileLogger {
    pub fn new(path: &str) -> Result<Self, std::io::Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    pub fn log(&self, action: &str, details: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}] {}\n", timestamp, action, details);

        // Mirror to stdout for Docker logs
        print!("{}", line);

        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn log_pick(&self, position: &str, reply: &str) {
        self.log("PICK", &format!("[{}] {}", position, reply));
    }

    pub fn log_lineup(&self, summary: &str) {
        self.log("LINEUP", &summary.replace('\n', " / "));
    }

    pub fn log_error(&self, error: &str) {
        self.log("ERROR", error);
    }
}
