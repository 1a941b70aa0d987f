//! Panel driver
//!
//! `Panel` is the protocol engine for one display on one serial link. It
//! accumulates raw bytes into terminated messages, sorts them into the
//! solicited and unsolicited queues, and builds every host-visible
//! operation - property access, device control, drawing - on top of a
//! single blocking read primitive ([`Panel::read_solicited`]).
//!
//! The protocol is strictly request/response: one solicited exchange is
//! outstanding at a time, and unsolicited traffic (touch events) is only
//! delivered when the application calls [`Panel::poll`].

use epaphe_protocol::codes;
use epaphe_protocol::frame::{self, MessageKind};
use epaphe_protocol::types::{Alignment, BackgroundFill, Colour};
use epaphe_protocol::value;
use epaphe_protocol::{Command, CommandStatus};
use heapless::Vec;

use crate::touch::{TouchListener, TouchRegistry};
use crate::transport::{Clock, Deadline, Transport};

/// Default budget for a stalled read, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Capacity of the working receive buffer (holds one message in flight).
pub const RAW_CAPACITY: usize = 128;

/// Capacity of each completed-message queue.
///
/// The queues are bounded: if the application polls too rarely for the
/// panel's event rate, whole messages are dropped with a warning once a
/// queue fills up.
pub const QUEUE_CAPACITY: usize = 512;

/// Driver for a single panel on a dedicated serial link.
///
/// The engine owns the transport and clock for its lifetime and assumes
/// exclusive use of the link; [`Panel::release`] gives them back.
pub struct Panel<T, C> {
    pub(crate) port: T,
    pub(crate) clock: C,
    timeout_ms: u64,
    raw: Vec<u8, RAW_CAPACITY>,
    solicited: Vec<u8, QUEUE_CAPACITY>,
    unsolicited: Vec<u8, QUEUE_CAPACITY>,
    touchables: TouchRegistry,
    command_result_required: bool,
}

impl<T: Transport, C: Clock> Panel<T, C> {
    /// Create a driver with the default read timeout.
    pub fn new(port: T, clock: C) -> Self {
        Self::with_timeout(port, clock, DEFAULT_TIMEOUT_MS)
    }

    /// Create a driver with a custom read timeout in milliseconds.
    pub fn with_timeout(port: T, clock: C, timeout_ms: u64) -> Self {
        Panel {
            port,
            clock,
            timeout_ms,
            raw: Vec::new(),
            solicited: Vec::new(),
            unsolicited: Vec::new(),
            touchables: TouchRegistry::new(),
            command_result_required: false,
        }
    }

    /// Give the transport and clock back to the caller.
    pub fn release(self) -> (T, C) {
        (self.port, self.clock)
    }

    /// Initialise the panel: enable completion reporting and show page 0.
    pub fn init(&mut self) -> bool {
        self.raw.clear();

        let reporting = self.require_command_result(true);

        self.send(&Command::new("page").arg(0));
        let shown = self.check_command_complete();

        reporting && shown
    }

    /// Control whether the panel reports a completion code after every
    /// instruction (`bkcmd=3`) or stays silent to save bandwidth
    /// (`bkcmd=0`). While reporting is off, completion checks succeed
    /// without touching the link.
    pub fn require_command_result(&mut self, require: bool) -> bool {
        if require {
            self.send(&Command::assign("bkcmd", 3));
            if self.check_completion(true) {
                self.command_result_required = true;
                return true;
            }
            false
        } else {
            self.send(&Command::assign("bkcmd", 0));
            self.command_result_required = false;
            true
        }
    }

    /// Service unsolicited traffic: run the accumulator once in passive
    /// mode, then dispatch every queued panel-initiated message.
    pub fn poll(&mut self) {
        self.read_message(false);
        self.process_unsolicited();
    }

    /// Register a touch listener. Most recently registered listeners are
    /// visited first. Returns false if the registry is full.
    pub fn register_touchable(&mut self, listener: TouchListener) -> bool {
        self.touchables.register(listener)
    }

    /// Remove a touch listener, matched by whole-record equality.
    pub fn unregister_touchable(&mut self, listener: &TouchListener) -> bool {
        self.touchables.unregister(listener)
    }

    /// Send a built instruction. Refuses (and returns false) if the
    /// builder overflowed its buffer.
    pub fn send(&mut self, command: &Command) -> bool {
        if !command.is_valid() {
            warn!("instruction overflowed the builder, not sent");
            return false;
        }
        self.send_raw(command.as_str());
        true
    }

    /// Send raw instruction text followed by the wire terminator.
    pub fn send_raw(&mut self, text: &str) {
        debug!("sending {} bytes: {}", text.len(), text);
        let written = self.port.write(text.as_bytes());
        if written != text.len() {
            warn!("short instruction write: {} of {}", written, text.len());
        }
        self.port.write(&codes::TERMINATOR);
    }

    /// Await one solicited message and hand its payload (opcode included,
    /// terminator excluded) to `handle`. On timeout `handle` receives an
    /// empty payload. Exactly the consumed message is drained from the
    /// queue; messages already queued behind it are preserved.
    ///
    /// This is the single blocking primitive every set/get operation is
    /// built on.
    pub fn read_solicited<R>(&mut self, handle: impl FnOnce(&[u8]) -> R) -> R {
        self.read_message(true);

        match frame::find_message(&self.solicited, 0) {
            Some(length) => {
                let result = handle(&self.solicited[..length]);

                let consumed = length + codes::TERMINATOR.len();
                let remaining = self.solicited.len() - consumed;
                for i in 0..remaining {
                    self.solicited[i] = self.solicited[consumed + i];
                }
                self.solicited.truncate(remaining);

                result
            }
            None => {
                debug!("no solicited reply before the deadline");
                handle(&[])
            }
        }
    }

    /// Check the completion code of the last instruction.
    pub fn check_command_complete(&mut self) -> bool {
        self.check_completion(false)
    }

    fn check_completion(&mut self, ignore_mode: bool) -> bool {
        if !ignore_mode && !self.command_result_required {
            return true;
        }

        let status = self.read_solicited(CommandStatus::from_reply);
        if !status.is_completed() {
            warn!("instruction did not complete: {}", status);
        }
        status.is_completed()
    }

    /// Await a numeric value reply.
    pub fn receive_number(&mut self) -> Option<u32> {
        self.read_solicited(|payload| {
            let number = value::decode_number(payload);
            if number.is_none() {
                debug!("numeric reply missing or malformed, {} bytes", payload.len());
            }
            number
        })
    }

    /// Await a string value reply, copying at most the capacity of `out`.
    /// Returns the number of bytes stored. Values are raw bytes: the
    /// panel emits codepage text, not UTF-8.
    pub fn receive_string<const N: usize>(&mut self, out: &mut Vec<u8, N>) -> usize {
        out.clear();
        self.read_solicited(|payload| match value::decode_string(payload) {
            Some(text) => {
                let take = text.len().min(N);
                if take < text.len() {
                    warn!("string reply truncated, {} of {} bytes kept", take, text.len());
                }
                // Cannot overflow: take is bounded by the capacity
                let _ = out.extend_from_slice(&text[..take]);
                take
            }
            None => {
                debug!("string reply missing or malformed");
                0
            }
        })
    }

    // ----- widget-facing property interface -----

    /// `name.property=value`, then completion check.
    pub fn set_number_property(&mut self, name: &str, property: &str, value: u32) -> bool {
        self.send(&Command::set_number(name, property, value)) && self.check_command_complete()
    }

    /// `get name.property`, awaiting a numeric reply.
    pub fn get_number_property(&mut self, name: &str, property: &str) -> Option<u32> {
        if !self.send(&Command::get(name, property)) {
            return None;
        }
        self.receive_number()
    }

    /// `name.property="value"`, then completion check.
    pub fn set_string_property(&mut self, name: &str, property: &str, value: &str) -> bool {
        self.send(&Command::set_string(name, property, value)) && self.check_command_complete()
    }

    /// `get name.property`, awaiting a string reply into `out`.
    pub fn get_string_property<const N: usize>(
        &mut self,
        name: &str,
        property: &str,
        out: &mut Vec<u8, N>,
    ) -> usize {
        if !self.send(&Command::get(name, property)) {
            return 0;
        }
        self.receive_string(out)
    }

    /// `verb name,value` (e.g. `vis bt0,1`), then completion check.
    pub fn set_property_command(&mut self, verb: &str, name: &str, value: u32) -> bool {
        self.send(&Command::new(verb).arg_name(name).arg(value)) && self.check_command_complete()
    }

    // ----- device operations -----

    /// Soft-reset the panel.
    pub fn reset(&mut self) -> bool {
        self.send(&Command::new("rest"));
        self.check_command_complete()
    }

    /// Redraw the whole current page.
    pub fn refresh(&mut self) -> bool {
        self.send(&Command::new("ref").arg(0));
        self.check_command_complete()
    }

    /// Redraw a single component.
    pub fn refresh_component(&mut self, name: &str) -> bool {
        self.send(&Command::new("ref").arg_name(name));
        self.check_command_complete()
    }

    /// Put the panel to sleep.
    pub fn sleep(&mut self) -> bool {
        self.send(&Command::assign("sleep", 1));
        self.check_command_complete()
    }

    /// Wake the panel from sleep.
    pub fn wake(&mut self) -> bool {
        self.send(&Command::assign("sleep", 0));
        self.check_command_complete()
    }

    /// Current backlight brightness (0-100).
    pub fn brightness(&mut self) -> Option<u16> {
        self.send(&Command::new("get").arg_name("dim"));
        self.receive_number().map(|value| value as u16)
    }

    /// Set backlight brightness (0-100); `persist` makes it the power-on
    /// default.
    pub fn set_brightness(&mut self, brightness: u16, persist: bool) -> bool {
        let target = if persist { "dims" } else { "dim" };
        self.send(&Command::assign(target, brightness as u32));
        self.check_command_complete()
    }

    /// Ask the panel which page is currently displayed.
    ///
    /// The reply may be preceded by a completion code for the query
    /// itself, which is consumed and checked along the way.
    pub fn current_page(&mut self) -> Option<u8> {
        enum Step {
            TimedOut,
            Pending(bool),
            Page(u8),
            Unexpected(u8),
        }

        self.send(&Command::new("sendme"));
        loop {
            let step = self.read_solicited(|payload| match payload {
                [] => Step::TimedOut,
                [_] => Step::Pending(CommandStatus::from_reply(payload).is_completed()),
                [codes::RET_CURRENT_PAGE_ID, id, ..] => Step::Page(*id),
                [opcode, ..] => Step::Unexpected(*opcode),
            });

            match step {
                Step::TimedOut => {
                    debug!("page query timed out");
                    return None;
                }
                // A completion code for the query itself; the id follows
                Step::Pending(true) => continue,
                Step::Pending(false) => return None,
                Step::Page(id) => {
                    debug!("current page: {}", id);
                    return Some(id);
                }
                Step::Unexpected(opcode) => {
                    warn!("unexpected page reply: {:#x}", opcode);
                    return None;
                }
            }
        }
    }

    // ----- drawing primitives -----

    /// Blank the display to a solid colour.
    pub fn clear(&mut self, colour: Colour) -> bool {
        self.send(&Command::new("cls").arg(colour.value() as u32));
        self.check_command_complete()
    }

    /// Show a pre-uploaded picture at a position.
    pub fn draw_picture(&mut self, x: u16, y: u16, id: u8) -> bool {
        self.send(
            &Command::new("pic")
                .arg(x as u32)
                .arg(y as u32)
                .arg(id as u32),
        );
        self.check_command_complete()
    }

    /// Show a region of a pre-uploaded picture.
    pub fn draw_picture_cropped(&mut self, x: u16, y: u16, w: u16, h: u16, id: u8) -> bool {
        self.send(
            &Command::new("picq")
                .arg(x as u32)
                .arg(y as u32)
                .arg(w as u32)
                .arg(h as u32)
                .arg(id as u32),
        );
        self.check_command_complete()
    }

    /// Draw a string inside a bounding box.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        font: u8,
        text: &str,
        foreground: Colour,
        background: Colour,
        fill: BackgroundFill,
        horizontal: Alignment,
        vertical: Alignment,
    ) -> bool {
        let command = Command::new("xstr")
            .arg(x as u32)
            .arg(y as u32)
            .arg(w as u32)
            .arg(h as u32)
            .arg(font as u32)
            .arg(foreground.value() as u32)
            .arg(background.value() as u32)
            .arg(horizontal as u32)
            .arg(vertical as u32)
            .arg(fill as u32)
            .arg_quoted(text);
        self.send(&command) && self.check_command_complete()
    }

    /// Draw a line between two points.
    pub fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, colour: Colour) -> bool {
        self.send(
            &Command::new("line")
                .arg(x1 as u32)
                .arg(y1 as u32)
                .arg(x2 as u32)
                .arg(y2 as u32)
                .arg(colour.value() as u32),
        );
        self.check_command_complete()
    }

    /// Draw a rectangle outline.
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, colour: Colour) -> bool {
        self.send(
            &Command::new("draw")
                .arg(x as u32)
                .arg(y as u32)
                .arg(x as u32 + w as u32)
                .arg(y as u32 + h as u32)
                .arg(colour.value() as u32),
        );
        self.check_command_complete()
    }

    /// Fill a rectangular area.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, colour: Colour) -> bool {
        self.send(
            &Command::new("fill")
                .arg(x as u32)
                .arg(y as u32)
                .arg(w as u32)
                .arg(h as u32)
                .arg(colour.value() as u32),
        );
        self.check_command_complete()
    }

    /// Draw a circle outline.
    pub fn draw_circle(&mut self, x: u16, y: u16, radius: u16, colour: Colour) -> bool {
        self.send(
            &Command::new("cir")
                .arg(x as u32)
                .arg(y as u32)
                .arg(radius as u32)
                .arg(colour.value() as u32),
        );
        self.check_command_complete()
    }

    /// Draw a filled circle.
    pub fn fill_circle(&mut self, x: u16, y: u16, radius: u16, colour: Colour) -> bool {
        self.send(
            &Command::new("cirs")
                .arg(x as u32)
                .arg(y as u32)
                .arg(radius as u32)
                .arg(colour.value() as u32),
        );
        self.check_command_complete()
    }

    // ----- frame accumulation -----

    /// Pull bytes from the transport until a complete message lands in a
    /// queue or the per-byte deadline passes.
    ///
    /// In passive mode (`wait_for_solicited == false`) the call returns
    /// immediately when nothing is buffered, and any single completed
    /// message ends the read. In waiting mode the loop continues until a
    /// solicited message arrives, queueing unsolicited messages it runs
    /// into along the way.
    ///
    /// A timed-out read leaves the partial message in the raw buffer for
    /// the next call; no bytes are lost.
    fn read_message(&mut self, wait_for_solicited: bool) {
        if !wait_for_solicited && self.port.available() == 0 {
            return;
        }

        loop {
            let deadline = Deadline::after(&self.clock, self.timeout_ms);
            let byte = loop {
                match self.port.read() {
                    Some(byte) => break byte,
                    None => {
                        if deadline.expired(&self.clock) {
                            return;
                        }
                    }
                }
            };

            if self.raw.push(byte).is_err() {
                warn!("receive buffer full, byte dropped");
                continue;
            }

            if frame::ends_with_terminator(&self.raw) {
                let unsolicited = frame::classify(self.raw[0]) == MessageKind::Unsolicited;
                let queue = if unsolicited {
                    debug!("unsolicited message queued: {}", &self.raw[..]);
                    &mut self.unsolicited
                } else {
                    debug!("solicited message queued: {}", &self.raw[..]);
                    &mut self.solicited
                };
                if queue.extend_from_slice(&self.raw).is_err() {
                    warn!("message queue full, message dropped");
                }
                self.raw.clear();

                if !wait_for_solicited || !unsolicited {
                    break;
                }
            }
        }
    }

    /// Drain the unsolicited queue, dispatching touch events to the
    /// registry and discarding everything else.
    fn process_unsolicited(&mut self) {
        let mut start = 0;
        while let Some(length) = frame::find_message(&self.unsolicited, start) {
            let message = &self.unsolicited[start..start + length];
            match message.first() {
                Some(&codes::RET_EVENT_TOUCH) => {
                    if length != 4 {
                        warn!("touch event with truncated payload, {} bytes", length);
                    } else {
                        let (page, component, event_type) = (message[1], message[2], message[3]);
                        debug!(
                            "touch event: page {}, component {}, type {}",
                            page, component, event_type
                        );
                        let notified = self.touchables.dispatch(page, component, event_type);
                        debug!("touch event accepted by {} listeners", notified);
                    }
                }
                Some(&codes::RET_EVENT_POSITION) => {
                    debug!("position event not implemented");
                }
                Some(&codes::RET_EVENT_SLEEP_POSITION) => {
                    debug!("sleep position event not implemented");
                }
                Some(&opcode) => {
                    warn!("unsolicited message not implemented: {:#x}", opcode);
                }
                None => {}
            }
            start += length + codes::TERMINATOR.len();
        }

        // Messages are delivered once; nothing is retried or replayed
        self.unsolicited.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockClock, MockPort};
    use crate::touch::TouchEvent;
    use core::sync::atomic::{AtomicUsize, Ordering};

    fn panel(port: MockPort) -> Panel<MockPort, MockClock> {
        // Each clock reading advances 100 ms, so a stalled read loop
        // exhausts the 1000 ms budget after a handful of iterations.
        Panel::new(port, MockClock::stepping(100))
    }

    fn require_results(panel: &mut Panel<MockPort, MockClock>) {
        panel.command_result_required = true;
    }

    #[test]
    fn test_send_appends_terminator() {
        let mut panel = panel(MockPort::new());
        panel.send(&Command::assign("dim", 50));
        assert_eq!(panel.port.sent(), b"dim=50\xFF\xFF\xFF");
    }

    #[test]
    fn test_overflowed_command_not_sent() {
        let text = [b'x'; epaphe_protocol::MAX_COMMAND_LEN];
        let text = core::str::from_utf8(&text).unwrap();
        let command = Command::set_string("t0", "txt", text);
        assert!(!command.is_valid());

        let mut panel = panel(MockPort::new());
        assert!(!panel.send(&command));
        assert!(panel.port.sent().is_empty());
    }

    #[test]
    fn test_completion_not_required_skips_transport() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x01]);
        let mut panel = panel(port);

        // Mode defaults to "not required" until init() enables it
        assert!(panel.check_command_complete());
        assert_eq!(panel.port.pending(), 4, "reply must not have been read");
    }

    #[test]
    fn test_completion_success_and_failure() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x01]);
        port.queue_reply(&[0x03]); // invalid page id
        let mut panel = panel(port);
        require_results(&mut panel);

        assert!(panel.check_command_complete());
        assert!(!panel.check_command_complete());
    }

    #[test]
    fn test_completion_timeout_is_failure() {
        let mut panel = panel(MockPort::new());
        require_results(&mut panel);
        assert!(!panel.check_command_complete());
    }

    #[test]
    fn test_set_number_property() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x01]);
        let mut panel = panel(port);
        require_results(&mut panel);

        assert!(panel.set_number_property("n0", "val", 42));
        assert_eq!(panel.port.sent(), b"n0.val=42\xFF\xFF\xFF");
    }

    #[test]
    fn test_get_number_property() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x71, 0x2A, 0x00, 0x00, 0x00]);
        let mut panel = panel(port);

        assert_eq!(panel.get_number_property("n0", "val"), Some(42));
        assert_eq!(panel.port.sent(), b"get n0.val\xFF\xFF\xFF");
    }

    #[test]
    fn test_get_number_malformed_reply() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x71, 0x2A]); // short payload
        let mut panel = panel(port);

        assert_eq!(panel.get_number_property("n0", "val"), None);
    }

    #[test]
    fn test_get_string_property() {
        let mut port = MockPort::new();
        port.queue_reply(b"\x70running  ");
        let mut panel = panel(port);

        let mut out = Vec::<u8, 32>::new();
        let length = panel.get_string_property("t0", "txt", &mut out);
        assert_eq!(length, 7);
        assert_eq!(&out[..], b"running");
    }

    #[test]
    fn test_get_string_truncates_to_capacity() {
        let mut port = MockPort::new();
        port.queue_reply(b"\x70abcdefgh");
        let mut panel = panel(port);

        let mut out = Vec::<u8, 4>::new();
        let length = panel.get_string_property("t0", "txt", &mut out);
        assert_eq!(length, 4);
        assert_eq!(&out[..], b"abcd");
    }

    #[test]
    fn test_solicited_queue_preserves_following_message() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x01]);
        port.queue_reply(&[0x71, 0x07, 0x00, 0x00, 0x00]);
        let mut panel = panel(port);
        require_results(&mut panel);

        // First call consumes only the completion code...
        assert!(panel.check_command_complete());
        // ...the number behind it is still intact
        assert_eq!(panel.receive_number(), Some(7));
    }

    #[test]
    fn test_wait_mode_queues_unsolicited_and_continues() {
        static TOUCHES: AtomicUsize = AtomicUsize::new(0);
        fn on_touch(_event: TouchEvent) {
            TOUCHES.fetch_add(1, Ordering::Relaxed);
        }
        TOUCHES.store(0, Ordering::Relaxed);

        let mut port = MockPort::new();
        // A touch event arrives before the awaited value reply
        port.queue_reply(&[0x65, 1, 5, 1]);
        port.queue_reply(&[0x71, 0x09, 0x00, 0x00, 0x00]);
        let mut panel = panel(port);
        panel.register_touchable(TouchListener {
            page: 1,
            component: 5,
            callback: on_touch,
        });

        // The blocking read skips past the touch event to the value
        assert_eq!(panel.receive_number(), Some(9));
        assert_eq!(TOUCHES.load(Ordering::Relaxed), 0);

        // The event was queued, not lost: poll delivers it
        panel.poll();
        assert_eq!(TOUCHES.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_poll_dispatches_matching_listeners_only() {
        static MATCHED: AtomicUsize = AtomicUsize::new(0);
        static OTHER_PAGE: AtomicUsize = AtomicUsize::new(0);
        fn on_match(event: TouchEvent) {
            assert_eq!(event.kind, crate::touch::TouchKind::Press);
            MATCHED.fetch_add(1, Ordering::Relaxed);
        }
        fn on_other(_event: TouchEvent) {
            OTHER_PAGE.fetch_add(1, Ordering::Relaxed);
        }
        MATCHED.store(0, Ordering::Relaxed);
        OTHER_PAGE.store(0, Ordering::Relaxed);

        let mut port = MockPort::new();
        port.queue_reply(&[0x65, 1, 5, 1]);
        let mut panel = panel(port);
        panel.register_touchable(TouchListener {
            page: 1,
            component: 5,
            callback: on_match,
        });
        panel.register_touchable(TouchListener {
            page: 2,
            component: 5,
            callback: on_other,
        });

        panel.poll();
        assert_eq!(MATCHED.load(Ordering::Relaxed), 1);
        assert_eq!(OTHER_PAGE.load(Ordering::Relaxed), 0);

        // Events are not replayed on the next poll
        panel.poll();
        assert_eq!(MATCHED.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_short_touch_payload_skipped() {
        static TOUCHES: AtomicUsize = AtomicUsize::new(0);
        fn on_touch(_event: TouchEvent) {
            TOUCHES.fetch_add(1, Ordering::Relaxed);
        }
        TOUCHES.store(0, Ordering::Relaxed);

        let mut port = MockPort::new();
        port.queue_reply(&[0x65, 1]); // truncated touch event
        let mut panel = panel(port);
        panel.register_touchable(TouchListener {
            page: 1,
            component: 5,
            callback: on_touch,
        });

        panel.poll();
        assert_eq!(TOUCHES.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_partial_message_survives_timeout() {
        let mut port = MockPort::new();
        port.queue_bytes(&[0x71, 0x2A, 0x00]); // value reply, cut short
        let mut panel = panel(port);

        // Times out without producing a message or losing the bytes
        assert_eq!(panel.receive_number(), None);

        // The rest arrives; the value completes from the preserved prefix
        panel.port.queue_bytes(&[0x00, 0x00, 0xFF, 0xFF, 0xFF]);
        assert_eq!(panel.receive_number(), Some(42));
    }

    #[test]
    fn test_passive_poll_returns_without_data() {
        let mut panel = panel(MockPort::new());
        // Must not block: nothing is available
        panel.poll();
        assert!(panel.port.sent().is_empty());
    }

    #[test]
    fn test_current_page_with_leading_status() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x01]);
        port.queue_reply(&[0x66, 7]);
        let mut panel = panel(port);

        assert_eq!(panel.current_page(), Some(7));
        assert_eq!(panel.port.sent(), b"sendme\xFF\xFF\xFF");
    }

    #[test]
    fn test_current_page_direct_reply() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x66, 3]);
        let mut panel = panel(port);

        assert_eq!(panel.current_page(), Some(3));
    }

    #[test]
    fn test_current_page_timeout() {
        let mut panel = panel(MockPort::new());
        assert_eq!(panel.current_page(), None);
    }

    #[test]
    fn test_init_sequence() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x01]); // bkcmd=3 completion
        port.queue_reply(&[0x01]); // page 0 completion
        let mut panel = panel(port);

        assert!(panel.init());
        assert_eq!(panel.port.sent(), b"bkcmd=3\xFF\xFF\xFFpage 0\xFF\xFF\xFF");
        assert!(panel.command_result_required);
    }

    #[test]
    fn test_require_command_result_off_is_unconditional() {
        let mut panel = panel(MockPort::new());
        require_results(&mut panel);

        // No reply queued, yet disabling always succeeds
        assert!(panel.require_command_result(false));
        assert!(!panel.command_result_required);
        assert_eq!(panel.port.sent(), b"bkcmd=0\xFF\xFF\xFF");
    }

    #[test]
    fn test_draw_text_escapes_quotes() {
        let mut panel = panel(MockPort::new());
        assert!(panel.draw_text(
            0,
            0,
            100,
            20,
            1,
            "a \"b\"",
            Colour::WHITE,
            Colour::BLACK,
            BackgroundFill::SolidColour,
            Alignment::Centre,
            Alignment::Centre,
        ));
        assert_eq!(
            panel.port.sent(),
            b"xstr 0,0,100,20,1,65535,0,1,1,1,\"a \\\"b\\\"\"\xFF\xFF\xFF"
        );
    }

    #[test]
    fn test_brightness_roundtrip() {
        let mut port = MockPort::new();
        port.queue_reply(&[0x71, 50, 0, 0, 0]);
        let mut panel = panel(port);

        assert_eq!(panel.brightness(), Some(50));
        assert_eq!(panel.port.sent(), b"get dim\xFF\xFF\xFF");

        panel.port.clear_sent();
        assert!(panel.set_brightness(80, true));
        assert_eq!(panel.port.sent(), b"dims=80\xFF\xFF\xFF");
    }
}
