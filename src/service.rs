use crate::file_logger::FileLogger;
use crate::picker::{HeroPicker, LINEUP_TRIGGER, ROLES};
use std::sync::Arc;
use tracing::error;

/// Maps chat triggers to draft handlers and owns the audit log. Any fault
/// escaping the picker is folded into a generic user reply here, so nothing
/// propagates into the dispatch loop.
pub struct PickerService {
    picker: Arc<HeroPicker>,
    audit: Arc<FileLogger>,
}

impl PickerService {
    pub fn new(picker: Arc<HeroPicker>, audit: Arc<FileLogger>) -> Self {
        Self { picker, audit }
    }

    /// One finished reply per recognized trigger, `None` for everything else.
    pub fn handle_command(&self, content: &str) -> Option<String> {
        let trigger = content.trim();
        if trigger == LINEUP_TRIGGER {
            return Some(self.lineup_reply());
        }

        let role = ROLES.iter().find(|role| role.trigger == trigger)?;
        let reply = match self.picker.pick_one(role) {
            Ok(reply) => {
                self.audit.log_pick(role.display, &reply);
                reply
            }
            Err(e) => {
                error!("picking {} champion failed: {}", role.display, e);
                self.audit.log_error(&e.to_string());
                "抽取失败，请稍后再试~".to_string()
            }
        };
        Some(reply)
    }

    /// Lineup draw with the fault channel still open, for the HTTP surface.
    pub fn try_lineup(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let reply = self.picker.pick_lineup()?;
        self.audit.log_lineup(&reply);
        Ok(reply)
    }

    /// Lineup draw for the chat surface; faults fold into a generic reply.
    pub fn lineup_reply(&self) -> String {
        match self.try_lineup() {
            Ok(reply) => reply,
            Err(e) => {
                error!("generating random lineup failed: {}", e);
                self.audit.log_error(&e.to_string());
                "阵容生成失败，请稍后再试~".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn service_with_full_pools(dir: &TempDir) -> PickerService {
        for (role, hero) in ROLES.iter().zip(["盖伦", "亚索", "金克丝", "盲僧", "锤石"]) {
            let mut map = HashMap::new();
            map.insert(role.key, vec![hero]);
            let json = serde_json::to_string(&map).unwrap();
            fs::write(dir.path().join(role.file), json).unwrap();
        }
        let audit_path = dir.path().join("audit.log");
        let audit = FileLogger::new(audit_path.to_str().unwrap()).unwrap();
        PickerService::new(
            Arc::new(HeroPicker::new(dir.path())),
            Arc::new(audit),
        )
    }

    #[test]
    fn test_role_triggers_dispatch() {
        let dir = TempDir::new().unwrap();
        let service = service_with_full_pools(&dir);

        let reply = service.handle_command("上单").unwrap();
        assert_eq!(reply, "随机抽取的上单英雄是：盖伦");
        let reply = service.handle_command("AD").unwrap();
        assert_eq!(reply, "随机抽取的下路AD英雄是：金克丝");
    }

    #[test]
    fn test_trigger_is_trimmed_and_exact() {
        let dir = TempDir::new().unwrap();
        let service = service_with_full_pools(&dir);

        assert!(service.handle_command("  打野  ").is_some());
        assert!(service.handle_command("ad").is_none());
        assert!(service.handle_command("随便聊聊").is_none());
    }

    #[test]
    fn test_lineup_trigger_renders_summary() {
        let dir = TempDir::new().unwrap();
        let service = service_with_full_pools(&dir);

        let reply = service.handle_command("随机阵容").unwrap();
        assert_eq!(
            reply,
            "随机阵容已生成：\n- 上单：盖伦\n- 中单：亚索\n- 下路AD：金克丝\n- 打野：盲僧\n- 辅助：锤石"
        );
    }
}
