//! Ftx1Rig -- the connected-radio handle for the FTX-1.
//!
//! This module ties the CAT text protocol ([`crate::protocol`],
//! [`crate::commands`]) to a [`Transport`] to produce a working controller.
//! At its heart is a single transaction primitive: send one command frame,
//! then read the reply byte by byte until the `;` terminator or the
//! configured timeout. Every public operation is one such transaction
//! (the clarifier takes two). There is no retry, no command queue, and no
//! unsolicited-frame handling; the rig's auto-information mode is expected
//! to be off.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, trace};

use ftxlib_core::{
    AgcMode, Band, Capabilities, Error, FirmwareCpu, MeterReading, MeterType, OperatingMode,
    PowerAmp, RadioInfo, Result, ScanMode, Side, Transport,
};

use crate::commands;
use crate::models::Ftx1Model;
use crate::protocol;

/// A connected FTX-1 controlled over CAT.
///
/// Constructed via [`Ftx1Builder`](crate::builder::Ftx1Builder). All rig
/// communication goes through the [`Transport`] provided at build time,
/// serialized by an internal lock so overlapping calls cannot interleave
/// their command/reply cycles.
pub struct Ftx1Rig {
    transport: Mutex<Box<dyn Transport>>,
    model: Ftx1Model,
    command_timeout: Duration,
    write_delay: Duration,
}

/// Judge a set-command reply.
///
/// The rig answers set commands with silence (an empty reply), an echo of
/// the new state, or `?` when it rejects the command.
fn check_set_reply(reply: &str, mnemonic: &str) -> Result<()> {
    if protocol::is_error_reply(reply) {
        return Err(Error::Protocol(format!(
            "rig rejected {mnemonic} command with error reply"
        )));
    }
    Ok(())
}

impl Ftx1Rig {
    /// Create a new `Ftx1Rig` from its constituent parts.
    ///
    /// This is called by [`Ftx1Builder`](crate::builder::Ftx1Builder);
    /// callers should use the builder API instead.
    pub(crate) fn new(
        transport: Box<dyn Transport>,
        model: Ftx1Model,
        command_timeout: Duration,
        write_delay: Duration,
    ) -> Self {
        Ftx1Rig {
            transport: Mutex::new(transport),
            model,
            command_timeout,
            write_delay,
        }
    }

    /// The station model this rig was built for.
    pub fn model(&self) -> &Ftx1Model {
        &self.model
    }

    /// Capability summary for the station model.
    pub fn capabilities(&self) -> &Capabilities {
        &self.model.capabilities
    }

    /// Run one command/reply transaction.
    ///
    /// Sends the framed command, waits the configured post-write delay,
    /// then reads the reply one byte at a time until the `;` terminator
    /// arrives, the transport reports a timeout or zero-length read, or
    /// the overall command timeout elapses. Returns whatever accumulated
    /// before the terminator, terminator stripped; a silent radio yields
    /// an empty reply, which the caller's parser judges. The transport
    /// lock is held for the whole cycle.
    async fn transact(&self, body: &str) -> Result<String> {
        let frame = protocol::encode_frame(body);
        let mut transport = self.transport.lock().await;
        transport.send(&frame).await?;

        if !self.write_delay.is_zero() {
            tokio::time::sleep(self.write_delay).await;
        }

        let deadline = Instant::now() + self.command_timeout;
        let mut accumulated: Vec<u8> = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match transport.receive(&mut byte, remaining).await {
                Ok(0) => break,
                Ok(_) => {
                    if byte[0] == protocol::TERMINATOR {
                        break;
                    }
                    accumulated.push(byte[0]);
                }
                Err(Error::Timeout) => break,
                Err(e) => return Err(e),
            }
        }
        drop(transport);

        let reply = String::from_utf8(accumulated)
            .map_err(|e| Error::Protocol(format!("reply is not valid ASCII: {e}")))?;
        if !reply.is_ascii() {
            return Err(Error::Protocol(format!(
                "reply contains non-ASCII characters: {reply:?}"
            )));
        }
        trace!(cmd = body, reply = %reply, "CAT transaction");
        Ok(reply)
    }

    /// Run a set-command transaction and judge the reply.
    async fn transact_set(&self, body: &str) -> Result<()> {
        let reply = self.transact(body).await?;
        check_set_reply(&reply, &body[..2])
    }

    // -----------------------------------------------------------------
    // Frequency and mode
    // -----------------------------------------------------------------

    /// Read a VFO frequency in hertz.
    pub async fn get_frequency(&self, side: Side) -> Result<u64> {
        debug!(%side, "reading frequency");
        let reply = self.transact(&commands::cmd_read_frequency(side)).await?;
        commands::parse_frequency_reply(&reply, side)
    }

    /// Tune a VFO to a frequency in hertz.
    pub async fn set_frequency(&self, side: Side, freq_hz: u64) -> Result<()> {
        let cmd = commands::cmd_set_frequency(side, freq_hz)?;
        debug!(%side, freq_hz, "setting frequency");
        self.transact_set(&cmd).await
    }

    /// Read a receiver's operating mode.
    pub async fn get_mode(&self, side: Side) -> Result<OperatingMode> {
        debug!(%side, "reading mode");
        let reply = self.transact(&commands::cmd_read_mode(side)).await?;
        commands::parse_mode_reply(&reply, side)
    }

    /// Set a receiver's operating mode.
    pub async fn set_mode(&self, side: Side, mode: OperatingMode) -> Result<()> {
        debug!(%side, %mode, "setting mode");
        self.transact_set(&commands::cmd_set_mode(side, mode)).await
    }

    // -----------------------------------------------------------------
    // PTT and power
    // -----------------------------------------------------------------

    /// Read the PTT state. Only CAT-initiated transmit reads as `true`.
    pub async fn get_ptt(&self) -> Result<bool> {
        debug!("reading PTT state");
        let reply = self.transact(&commands::cmd_read_ptt()).await?;
        commands::parse_ptt_reply(&reply)
    }

    /// Key or unkey the transmitter via CAT.
    pub async fn set_ptt(&self, on: bool) -> Result<()> {
        debug!(on, "setting PTT");
        self.transact_set(&commands::cmd_set_ptt(on)).await
    }

    /// Read the RF power setting: which amplifier it applies to, and watts.
    pub async fn get_power(&self) -> Result<(PowerAmp, u32)> {
        debug!("reading RF power");
        let reply = self.transact(&commands::cmd_read_power()).await?;
        commands::parse_power_reply(&reply)
    }

    /// Set the RF power in watts for this station's amplifier.
    ///
    /// The valid range depends on the model: 1-10 W for the Field head,
    /// 5-100 W with the SPA-1.
    pub async fn set_power(&self, watts: u32) -> Result<()> {
        let cmd = commands::cmd_set_power(self.model.amp, watts)?;
        debug!(amp = %self.model.amp, watts, "setting RF power");
        self.transact_set(&cmd).await
    }

    // -----------------------------------------------------------------
    // AGC, audio levels, meters
    // -----------------------------------------------------------------

    /// Read a receiver's AGC mode.
    pub async fn get_agc(&self, side: Side) -> Result<AgcMode> {
        debug!(%side, "reading AGC mode");
        let reply = self.transact(&commands::cmd_read_agc(side)).await?;
        commands::parse_agc_reply(&reply, side)
    }

    /// Set a receiver's AGC mode.
    pub async fn set_agc(&self, side: Side, agc: AgcMode) -> Result<()> {
        debug!(%side, %agc, "setting AGC mode");
        self.transact_set(&commands::cmd_set_agc(side, agc)).await
    }

    /// Read a receiver's AF gain (0-255).
    pub async fn get_af_gain(&self, side: Side) -> Result<u8> {
        debug!(%side, "reading AF gain");
        let reply = self.transact(&commands::cmd_read_af_gain(side)).await?;
        commands::parse_af_gain_reply(&reply, side)
    }

    /// Set a receiver's AF gain (0-255).
    pub async fn set_af_gain(&self, side: Side, level: u8) -> Result<()> {
        debug!(%side, level, "setting AF gain");
        self.transact_set(&commands::cmd_set_af_gain(side, level))
            .await
    }

    /// Read a receiver's squelch level (0-255).
    pub async fn get_squelch(&self, side: Side) -> Result<u8> {
        debug!(%side, "reading squelch");
        let reply = self.transact(&commands::cmd_read_squelch(side)).await?;
        commands::parse_squelch_reply(&reply, side)
    }

    /// Set a receiver's squelch level (0-255).
    pub async fn set_squelch(&self, side: Side, level: u8) -> Result<()> {
        debug!(%side, level, "setting squelch");
        self.transact_set(&commands::cmd_set_squelch(side, level))
            .await
    }

    /// Read a receiver's S-meter as a raw count (0-255).
    ///
    /// Use [`ftxlib_core::s_units_from_raw`] to render the count as
    /// S-units.
    pub async fn get_s_meter(&self, side: Side) -> Result<u16> {
        debug!(%side, "reading S-meter");
        let reply = self.transact(&commands::cmd_read_s_meter(side)).await?;
        commands::parse_s_meter_reply(&reply, side)
    }

    /// Read one of the selectable meters (SWR, ALC, PO, IDD, VDD, ...).
    pub async fn get_meter(&self, meter: MeterType) -> Result<MeterReading> {
        debug!(%meter, "reading meter");
        let reply = self.transact(&commands::cmd_read_meter(meter)).await?;
        commands::parse_meter_reply(&reply, meter)
    }

    // -----------------------------------------------------------------
    // VFO, memory, split
    // -----------------------------------------------------------------

    /// Toggle a side between VFO and memory tuning.
    pub async fn toggle_vfo_memory(&self, side: Side) -> Result<()> {
        debug!(%side, "toggling VFO/memory");
        self.transact_set(&commands::cmd_vfo_memory_toggle(side))
            .await
    }

    /// Recall a memory channel (1-99) on a side.
    pub async fn set_memory_channel(&self, side: Side, channel: u8) -> Result<()> {
        let cmd = commands::cmd_set_memory_channel(side, channel)?;
        debug!(%side, channel, "selecting memory channel");
        self.transact_set(&cmd).await
    }

    /// Copy the current memory channel's contents to a side's VFO.
    pub async fn memory_to_vfo(&self, side: Side) -> Result<()> {
        debug!(%side, "copying memory to VFO");
        self.transact_set(&commands::cmd_memory_to_vfo(side)).await
    }

    /// Read whether split operation is on.
    pub async fn get_split(&self) -> Result<bool> {
        debug!("reading split state");
        let reply = self.transact(&commands::cmd_read_split()).await?;
        commands::parse_split_reply(&reply)
    }

    /// Turn split operation on or off.
    pub async fn set_split(&self, on: bool) -> Result<()> {
        debug!(on, "setting split");
        self.transact_set(&commands::cmd_set_split(on)).await
    }

    /// Exchange the MAIN and SUB VFO contents.
    pub async fn swap_vfo(&self) -> Result<()> {
        debug!("swapping VFOs");
        self.transact_set(&commands::cmd_swap_vfo()).await
    }

    // -----------------------------------------------------------------
    // Clarifier
    // -----------------------------------------------------------------

    /// Configure the clarifier: RX/TX enables and the offset in hertz.
    ///
    /// This is two sequential transactions on the wire, flags first and
    /// offset second. The offset is validated (magnitude at most 9995 Hz)
    /// before anything is sent, so an invalid offset leaves the radio
    /// untouched.
    pub async fn set_clarifier(
        &self,
        side: Side,
        rx_on: bool,
        tx_on: bool,
        offset_hz: i32,
    ) -> Result<()> {
        let offset_cmd = commands::cmd_set_clarifier_offset(side, offset_hz)?;
        let flags_cmd = commands::cmd_set_clarifier_flags(side, rx_on, tx_on);
        debug!(%side, rx_on, tx_on, offset_hz, "setting clarifier");
        self.transact_set(&flags_cmd).await?;
        self.transact_set(&offset_cmd).await
    }

    // -----------------------------------------------------------------
    // Band and scan
    // -----------------------------------------------------------------

    /// Step a side up to the next band.
    pub async fn band_up(&self, side: Side) -> Result<()> {
        debug!(%side, "band up");
        self.transact_set(&commands::cmd_band_up(side)).await
    }

    /// Step a side down to the previous band.
    pub async fn band_down(&self, side: Side) -> Result<()> {
        debug!(%side, "band down");
        self.transact_set(&commands::cmd_band_down(side)).await
    }

    /// Jump a side directly to a band.
    pub async fn set_band(&self, side: Side, band: Band) -> Result<()> {
        debug!(%side, %band, "selecting band");
        self.transact_set(&commands::cmd_set_band(side, band)).await
    }

    /// Start or stop scanning on a side.
    pub async fn set_scan(&self, side: Side, mode: ScanMode) -> Result<()> {
        debug!(%side, ?mode, "setting scan");
        self.transact_set(&commands::cmd_set_scan(side, mode)).await
    }

    // -----------------------------------------------------------------
    // CW
    // -----------------------------------------------------------------

    /// Turn the internal keyer on or off.
    pub async fn set_keyer(&self, on: bool) -> Result<()> {
        debug!(on, "setting keyer");
        self.transact_set(&commands::cmd_set_keyer(on)).await
    }

    /// Read the keyer speed in WPM.
    pub async fn get_keyer_speed(&self) -> Result<u8> {
        debug!("reading keyer speed");
        let reply = self.transact(&commands::cmd_read_keyer_speed()).await?;
        commands::parse_keyer_speed_reply(&reply)
    }

    /// Set the keyer speed in WPM (4-60).
    pub async fn set_keyer_speed(&self, wpm: u8) -> Result<()> {
        let cmd = commands::cmd_set_keyer_speed(wpm)?;
        debug!(wpm, "setting keyer speed");
        self.transact_set(&cmd).await
    }

    /// Set the CW sidetone pitch in hertz (300-1050, 10 Hz steps).
    pub async fn set_cw_pitch(&self, pitch_hz: u16) -> Result<()> {
        let cmd = commands::cmd_set_cw_pitch(pitch_hz)?;
        debug!(pitch_hz, "setting CW pitch");
        self.transact_set(&cmd).await
    }

    /// Turn CW break-in on or off.
    pub async fn set_break_in(&self, on: bool) -> Result<()> {
        debug!(on, "setting break-in");
        self.transact_set(&commands::cmd_set_break_in(on)).await
    }

    // -----------------------------------------------------------------
    // Filters and noise reduction
    // -----------------------------------------------------------------

    /// Set the IF shift in hertz (-1200..=1200, 20 Hz steps).
    pub async fn set_if_shift(&self, side: Side, shift_hz: i16) -> Result<()> {
        let cmd = commands::cmd_set_if_shift(side, shift_hz)?;
        debug!(%side, shift_hz, "setting IF shift");
        self.transact_set(&cmd).await
    }

    /// Set the filter width by table index (0-23).
    pub async fn set_filter_width(&self, side: Side, width: u8) -> Result<()> {
        let cmd = commands::cmd_set_filter_width(side, width)?;
        debug!(%side, width, "setting filter width");
        self.transact_set(&cmd).await
    }

    /// Turn the narrow filter on or off.
    pub async fn set_narrow(&self, side: Side, on: bool) -> Result<()> {
        debug!(%side, on, "setting narrow filter");
        self.transact_set(&commands::cmd_set_narrow(side, on)).await
    }

    /// Set the noise blanker level (0-10, 0 = off).
    pub async fn set_noise_blanker(&self, side: Side, level: u8) -> Result<()> {
        let cmd = commands::cmd_set_noise_blanker(side, level)?;
        debug!(%side, level, "setting noise blanker");
        self.transact_set(&cmd).await
    }

    /// Set the noise reduction level (0-10, 0 = off).
    pub async fn set_noise_reduction(&self, side: Side, level: u8) -> Result<()> {
        let cmd = commands::cmd_set_noise_reduction(side, level)?;
        debug!(%side, level, "setting noise reduction");
        self.transact_set(&cmd).await
    }

    /// Turn the digital notch filter on or off.
    pub async fn set_digital_notch(&self, side: Side, on: bool) -> Result<()> {
        debug!(%side, on, "setting digital notch");
        self.transact_set(&commands::cmd_set_digital_notch(side, on))
            .await
    }

    // -----------------------------------------------------------------
    // Information and utility
    // -----------------------------------------------------------------

    /// Read the composite radio information snapshot (`IF`).
    pub async fn get_radio_info(&self) -> Result<RadioInfo> {
        debug!("reading radio info");
        let reply = self.transact(&commands::cmd_read_info()).await?;
        commands::parse_radio_info_reply(&reply)
    }

    /// Read the CAT identity. The FTX-1 reports [`commands::CAT_ID`].
    pub async fn get_id(&self) -> Result<String> {
        debug!("reading CAT identity");
        let reply = self.transact(&commands::cmd_read_id()).await?;
        commands::parse_id_reply(&reply)
    }

    /// Read a CPU's firmware version string.
    pub async fn get_firmware_version(&self, cpu: FirmwareCpu) -> Result<String> {
        debug!(%cpu, "reading firmware version");
        let reply = self
            .transact(&commands::cmd_read_firmware_version(cpu))
            .await?;
        commands::parse_firmware_version_reply(&reply, cpu)
    }

    /// Turn auto-information mode on or off.
    ///
    /// This crate's request/reply engine expects it off; turning it on is
    /// only useful before handing the port to other software.
    pub async fn set_auto_information(&self, on: bool) -> Result<()> {
        debug!(on, "setting auto-information");
        self.transact_set(&commands::cmd_set_auto_information(on))
            .await
    }

    /// Lock or unlock the front panel and dial.
    pub async fn set_lock(&self, on: bool) -> Result<()> {
        debug!(on, "setting lock");
        self.transact_set(&commands::cmd_set_lock(on)).await
    }

    /// Whether the underlying transport is connected.
    pub async fn is_connected(&self) -> bool {
        self.transport.lock().await.is_connected()
    }

    /// Close the underlying transport.
    pub async fn close(&self) -> Result<()> {
        debug!("closing rig transport");
        self.transport.lock().await.close().await
    }
}
