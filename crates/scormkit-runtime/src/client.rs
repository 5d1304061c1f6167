//! The content-side client.
//!
//! Runs inside the sandboxed content frame, where the LMS is unreachable;
//! everything it does is an outbound [`Command`] through the channel seam.

use scormkit_protocol::{Command, LessonStatus, Reply, StudentInfo};
use tracing::{debug, info};

/// The outbound half of the frame boundary as seen by the client.
pub trait CommandSender {
    fn send(&self, cmd: Command);
}

/// A surface that can show the student identity (a HUD label, a debug
/// overlay). Refreshed synchronously whenever an identity reply lands.
pub trait IdentityDisplay {
    fn show(&mut self, info: &StudentInfo);
}

/// Level count used when the caller does not supply one.
pub const DEFAULT_MAX_LEVELS: i32 = 2;

/// Content-side progress and identity tracking.
///
/// Owns the monotonic high-water mark for reported completion: a progress
/// report whose percentage does not beat the best already reported is
/// suppressed entirely, before any message is sent. The bridge never sees
/// regressive updates and does not enforce this itself.
pub struct ContentClient<S: CommandSender> {
    sender: S,
    max_levels: i32,
    highest_score_percent: f32,
    student: Option<StudentInfo>,
    display: Option<Box<dyn IdentityDisplay>>,
}

impl<S: CommandSender> ContentClient<S> {
    /// `max_levels` below 1 is lifted to 1 to keep percentages defined.
    pub fn new(sender: S, max_levels: i32) -> Self {
        ContentClient {
            sender,
            max_levels: max_levels.max(1),
            highest_score_percent: 0.0,
            student: None,
            display: None,
        }
    }

    pub fn bind_display(&mut self, display: Box<dyn IdentityDisplay>) {
        self.display = Some(display);
    }

    pub fn student(&self) -> Option<&StudentInfo> {
        self.student.as_ref()
    }

    pub fn highest_score_percent(&self) -> f32 {
        self.highest_score_percent
    }

    /// Startup sequence: mark the attempt as started-but-not-done and ask
    /// for the student identity. Both precede any progress report.
    pub fn start(&mut self) {
        self.report_status(LessonStatus::Incomplete);
        self.request_student_info();
    }

    /// Announce readiness so the bridge knows where to send replies.
    pub fn announce_ready(&self) {
        self.sender.send(Command::ContentReady);
    }

    pub fn request_init(&self) {
        self.sender.send(Command::Init);
    }

    pub fn report_score(&self, score: i32) {
        self.sender.send(Command::SetScore(score));
    }

    pub fn report_status(&self, status: LessonStatus) {
        self.sender.send(Command::SetStatus(status));
    }

    pub fn finish(&self) {
        self.sender.send(Command::Finish);
    }

    pub fn request_student_info(&self) {
        self.sender.send(Command::RequestStudentInfo);
    }

    /// Report that `levels_completed` levels are done.
    ///
    /// Input is clamped to `[0, max_levels]`. When the derived completion
    /// percentage beats the high-water mark, three ordered messages go
    /// out: the score, the resume bookmark, and the status (`passed` only
    /// once every level is done). Otherwise nothing is sent at all.
    pub fn report_level_progress(&mut self, levels_completed: i32) {
        let levels = levels_completed.clamp(0, self.max_levels);
        let percent = levels as f32 / self.max_levels as f32 * 100.0;
        if percent <= self.highest_score_percent {
            debug!(
                percent = f64::from(percent),
                high_water = f64::from(self.highest_score_percent),
                "suppressing regressive progress report"
            );
            return;
        }
        self.highest_score_percent = percent;

        self.sender.send(Command::SetScore(percent.round() as i32));
        self.sender.send(Command::SetLocation(levels.to_string()));
        let status = if levels >= self.max_levels {
            LessonStatus::Passed
        } else {
            LessonStatus::Incomplete
        };
        self.sender.send(Command::SetStatus(status));
        debug!(
            levels,
            max = self.max_levels,
            percent = f64::from(percent),
            "progress reported"
        );
    }

    /// Consume an identity reply: the snapshot is replaced wholesale and a
    /// bound display refreshed synchronously.
    pub fn on_reply(&mut self, reply: Reply) {
        match reply {
            Reply::StudentInfo(info) => {
                info!(id = %info.id, name = %info.name, "student identity received");
                if let Some(display) = self.display.as_mut() {
                    display.show(&info);
                }
                self.student = Some(info);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        sent: Rc<RefCell<Vec<Command>>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<Command> {
            self.sent.borrow_mut().drain(..).collect()
        }
    }

    impl CommandSender for Recorder {
        fn send(&self, cmd: Command) {
            self.sent.borrow_mut().push(cmd);
        }
    }

    fn client(max_levels: i32) -> (ContentClient<Recorder>, Recorder) {
        let recorder = Recorder::default();
        (ContentClient::new(recorder.clone(), max_levels), recorder)
    }

    #[test]
    fn start_reports_incomplete_then_requests_identity() {
        let (mut client, recorder) = client(2);
        client.start();
        assert_eq!(
            recorder.take(),
            vec![
                Command::SetStatus(LessonStatus::Incomplete),
                Command::RequestStudentInfo,
            ]
        );
    }

    #[test]
    fn progress_sends_score_location_status_in_order() {
        let (mut client, recorder) = client(2);
        client.report_level_progress(1);
        assert_eq!(
            recorder.take(),
            vec![
                Command::SetScore(50),
                Command::SetLocation("1".to_string()),
                Command::SetStatus(LessonStatus::Incomplete),
            ]
        );
    }

    #[test]
    fn completing_every_level_reports_passed() {
        let (mut client, recorder) = client(2);
        client.report_level_progress(2);
        assert_eq!(
            recorder.take(),
            vec![
                Command::SetScore(100),
                Command::SetLocation("2".to_string()),
                Command::SetStatus(LessonStatus::Passed),
            ]
        );
    }

    #[test]
    fn input_is_clamped_to_the_level_range() {
        let (mut client, recorder) = client(2);
        client.report_level_progress(-5);
        // Clamped to 0 => 0% does not beat the 0.0 high-water mark.
        assert_eq!(recorder.take(), vec![]);

        client.report_level_progress(99);
        assert_eq!(
            recorder.take(),
            vec![
                Command::SetScore(100),
                Command::SetLocation("2".to_string()),
                Command::SetStatus(LessonStatus::Passed),
            ]
        );
    }

    #[test]
    fn regressive_and_repeated_reports_are_suppressed() {
        let (mut client, recorder) = client(4);
        client.report_level_progress(3);
        assert_eq!(recorder.take().len(), 3);

        client.report_level_progress(3);
        assert_eq!(recorder.take(), vec![]);

        client.report_level_progress(1);
        assert_eq!(recorder.take(), vec![]);

        client.report_level_progress(4);
        assert_eq!(recorder.take().len(), 3);
        assert_eq!(client.highest_score_percent(), 100.0);
    }

    #[test]
    fn identity_reply_overwrites_the_snapshot_wholesale() {
        let (mut client, _recorder) = client(2);
        client.on_reply(Reply::StudentInfo(StudentInfo {
            id: "s1".to_string(),
            name: "First".to_string(),
        }));
        client.on_reply(Reply::StudentInfo(StudentInfo {
            id: "s2".to_string(),
            name: String::new(),
        }));
        let student = client.student().expect("snapshot present");
        assert_eq!(student.id, "s2");
        assert_eq!(student.name, "");
    }

    #[test]
    fn identity_reply_refreshes_a_bound_display() {
        struct Panel(Rc<RefCell<Vec<String>>>);
        impl IdentityDisplay for Panel {
            fn show(&mut self, info: &StudentInfo) {
                self.0.borrow_mut().push(format!("{} ({})", info.name, info.id));
            }
        }

        let shown = Rc::new(RefCell::new(Vec::new()));
        let (mut client, _recorder) = client(2);
        client.bind_display(Box::new(Panel(Rc::clone(&shown))));
        client.on_reply(Reply::StudentInfo(StudentInfo {
            id: "s1".to_string(),
            name: "Ada".to_string(),
        }));
        assert_eq!(shown.borrow().as_slice(), ["Ada (s1)"]);
    }

    #[test]
    fn degenerate_level_count_is_lifted_to_one() {
        let (mut client, recorder) = client(0);
        client.report_level_progress(1);
        assert_eq!(
            recorder.take(),
            vec![
                Command::SetScore(100),
                Command::SetLocation("1".to_string()),
                Command::SetStatus(LessonStatus::Passed),
            ]
        );
    }
}
