use btleplug::api::bleuuid::{uuid_from_u16, BleUuid};
use btleplug::api::{Central, CentralEvent, Characteristic, Manager as _, Peripheral as _, ScanFilter, WriteType};
use btleplug::platform::{Manager, Peripheral};
use clap::Parser;
use consts::{COMMAND_CHAR_UUID, LED_SERVICE_UUID, READOUT_CHAR_UUID, READOUT_LEN};
use futures::stream::StreamExt;
use gatt_led::{LedState, Readout};
use log::{debug, info, warn};
use std::error::Error;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Parser)]
struct Args {
    #[arg(short, long)]
    list_adapters: bool,
    #[arg(short, long, default_value_t = String::from("hci0"))]
    adapter: String,
    /// Name of the peripheral to connect to
    #[arg(short, long, default_value_t = String::from(consts::DEVICE_NAME))]
    name: String,
    #[arg(short, long)]
    enumerate: bool,
    /// Set the LEDs: 0 = all off, 1 = LED1, 2 = LED2, 3 = all on
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=3))]
    set: Option<u8>,
    /// Write raw hex bytes to the command characteristic (at most 10 bytes)
    #[arg(short, long, value_parser = parse_payload)]
    raw: Option<Payload>,
    /// Poll the readout every 500ms and turn the LEDs off after a button press
    #[arg(short, long)]
    watch: bool,
}

const LED_SERVICE: Uuid = uuid_from_u16(LED_SERVICE_UUID);
const READOUT_CHARACTERISTIC_UUID: Uuid = uuid_from_u16(READOUT_CHAR_UUID);
const COMMAND_CHARACTERISTIC_UUID: Uuid = uuid_from_u16(COMMAND_CHAR_UUID);

const POLL_PERIOD: Duration = Duration::from_millis(500);

/// Bytes given on the command line for the command characteristic.
#[derive(Clone, Debug, PartialEq)]
struct Payload(Vec<u8>);

fn parse_payload(s: &str) -> Result<Payload, String> {
    let payload = hex::decode(s.trim_start_matches("0x")).map_err(|e| e.to_string())?;
    if payload.len() > READOUT_LEN {
        return Err(format!("payload is {} bytes, at most {} fit", payload.len(), READOUT_LEN));
    }
    Ok(Payload(payload))
}

fn find_characteristic(peripheral: &Peripheral, uuid: Uuid) -> Result<Characteristic, Box<dyn Error>> {
    peripheral
        .characteristics()
        .into_iter()
        .find(|c| c.uuid == uuid)
        .ok_or_else(|| format!("characteristic {} not found", uuid.to_short_string()).into())
}

/// Mirrors what the phone app does: show the readout, acknowledge button presses.
async fn watch(peripheral: &Peripheral, readout: &Characteristic, command: &Characteristic) -> Result<(), Box<dyn Error>> {
    let mut ticker = tokio::time::interval(POLL_PERIOD);
    loop {
        ticker.tick().await;
        if !peripheral.is_connected().await? {
            warn!("Peripheral disconnected, stop watching");
            return Ok(());
        }
        let value = peripheral.read(readout).await?;
        match Readout::classify(&value) {
            Readout::Button(button) => {
                println!("Button {:?} pressed", button);
                peripheral.write(command, &[u8::from(LedState::AllOff)], WriteType::WithResponse).await?;
                info!("LEDs switched off");
            }
            Readout::Echo(state) => println!("Current: {:?}", state),
            Readout::Other => println!("Current: {}", hex::encode(&value)),
        }
    }
}

async fn drive(peripheral: &Peripheral, args: &Args) -> Result<(), Box<dyn Error>> {
    peripheral.discover_services().await?;
    if args.enumerate {
        for service in peripheral.services() {
            println!("Service UUID {}, primary: {}", service.uuid, service.primary);
            for characteristic in service.characteristics {
                println!("  {:?}", characteristic);
            }
        }
    }

    let readout = find_characteristic(peripheral, READOUT_CHARACTERISTIC_UUID)?;
    let command = find_characteristic(peripheral, COMMAND_CHARACTERISTIC_UUID)?;

    if let Some(state) = args.set {
        println!("Setting LEDs to {:?}", LedState::try_from(state).unwrap_or_default());
        peripheral.write(&command, &[state], WriteType::WithResponse).await?;
    }
    if let Some(Payload(payload)) = &args.raw {
        println!("Writing 0x{}", hex::encode(payload));
        peripheral.write(&command, payload, WriteType::WithResponse).await?;
    }

    let value = peripheral.read(&readout).await?;
    println!("Readout: 0x{} ({:?})", hex::encode(&value), Readout::classify(&value));

    if args.watch {
        watch(peripheral, &readout, &command).await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let args = Args::parse();

    let manager = Manager::new().await?;
    let adapter_list = manager.adapters().await?;
    if adapter_list.is_empty() {
        return Err("No Bluetooth adapters found".into());
    }
    if args.list_adapters {
        println!("List of available bluetooth adapters:");
        for adapter in adapter_list.iter() {
            println!("- {}", adapter.adapter_info().await?);
        }
        return Ok(());
    }

    // connect to the wanted adapter or the first one by default
    let mut wanted_adapter = None;
    for adapter in adapter_list.iter() {
        if let Ok(info) = adapter.adapter_info().await {
            if info.contains(&args.adapter) {
                info!("Wanted adapter found: {}", info);
                wanted_adapter = Some(adapter.clone());
                break;
            }
        }
    }
    let central = match wanted_adapter {
        Some(adapter) => adapter,
        None => {
            let first = adapter_list[0].clone();
            println!(
                "Wanted adapter not found, using first available one: {}",
                first.adapter_info().await?
            );
            first
        }
    };
    debug!("CentralState: {:?}", central.adapter_state().await?);

    let mut events = central.events().await?;

    println!("Scanning for {}...", args.name);
    central.start_scan(ScanFilter { services: vec![LED_SERVICE] }).await?;

    while let Some(event) = events.next().await {
        match event {
            CentralEvent::DeviceDiscovered(id) => {
                let peripheral = central.peripheral(&id).await?;
                let properties = peripheral.properties().await?;
                let name = properties.and_then(|p| p.local_name).unwrap_or_default();
                if name != args.name {
                    continue;
                }
                println!("DeviceDiscovered: {}", name);
                central.stop_scan().await?;
                if !peripheral.is_connected().await? {
                    println!("Connecting to peripheral {}...", name);
                    if let Err(err) = peripheral.connect().await {
                        eprintln!("Error connecting to peripheral, skipping: {}", err);
                        central.start_scan(ScanFilter { services: vec![LED_SERVICE] }).await?;
                        continue;
                    }
                }

                let result = drive(&peripheral, &args).await;
                if peripheral.is_connected().await? {
                    println!("Disconnecting from {}...", name);
                    peripheral.disconnect().await?;
                }
                return result;
            }
            CentralEvent::StateUpdate(state) => {
                debug!("AdapterStatusUpdate {:?}", state);
            }
            CentralEvent::ServicesAdvertisement { id, services } => {
                let services: Vec<String> = services.into_iter().map(|s| s.to_short_string()).collect();
                debug!("ServicesAdvertisement: {:?}, {:?}", id, services);
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_from_hex() {
        assert_eq!(parse_payload("0102"), Ok(Payload(vec![1, 2])));
        assert_eq!(parse_payload("0x03"), Ok(Payload(vec![3])));
        assert_eq!(parse_payload(""), Ok(Payload(vec![])));
    }

    #[test]
    fn payload_rejects_bad_input() {
        assert!(parse_payload("0g").is_err());
        assert!(parse_payload("010").is_err());
        assert!(parse_payload("0102030405060708090a0b").is_err());
        assert!(parse_payload("0102030405060708090a").is_ok());
    }

    #[test]
    fn characteristic_uuids() {
        assert_eq!(LED_SERVICE.to_string(), "0000a000-0000-1000-8000-00805f9b34fb");
        assert_eq!(READOUT_CHARACTERISTIC_UUID.to_string(), "0000a001-0000-1000-8000-00805f9b34fb");
        assert_eq!(COMMAND_CHARACTERISTIC_UUID.to_string(), "0000a002-0000-1000-8000-00805f9b34fb");
    }
}
