// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, title: &str) {
        self.done += 1;
        self.set_status(format!("Done {} ({}/{})", title, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Complete"));
        } else {
            self.set_status(format!("Complete ({}/{})", self.done, self.total));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_items_into_status() {
        let status = Arc::new(Mutex::new(String::new()));
        let mut p = GuiProgress::new(status.clone());
        p.begin(2);
        p.item_done("Sinners");
        assert_eq!(*status.lock().unwrap(), "Done Sinners (1/2)");
        p.item_done("Thunderbolts*");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Complete (2/2)");
    }
}
