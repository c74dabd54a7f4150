use dmg_core::core::machine::Machine;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::input::KeyMap;
use crate::overlay;
use crate::screenshot;
use crate::video::Video;

pub fn run(machine: &mut dyn Machine, key_map: &KeyMap, scale: u32) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");

    let (width, height) = machine.display_size();
    let mut video = Video::new(&sdl_video, "dmg-frontend", width, height, scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    let buffer_size = (width * height * 3) as usize;
    let mut framebuffer = vec![0u8; buffer_size];

    let mut last_fps_sample = std::time::Instant::now();
    let mut frames_since_sample = 0u32;
    let mut fps_text = String::from("--.-");

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::F2),
                    repeat: false,
                    ..
                } => {
                    let path = std::path::Path::new("screenshot.png");
                    if let Err(e) = screenshot::save(path, &framebuffer, width, height) {
                        eprintln!("Warning: failed to write screenshot: {e}");
                    }
                }

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(button_id) = key_map.get(sc) {
                        machine.set_input(button_id, true);
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(button_id) = key_map.get(sc) {
                        machine.set_input(button_id, false);
                    }
                }

                _ => {}
            }
        }

        machine.run_frame();
        machine.render_frame(&mut framebuffer);

        frames_since_sample += 1;
        let elapsed = last_fps_sample.elapsed();
        if elapsed.as_secs_f32() >= 0.5 {
            let fps = frames_since_sample as f32 / elapsed.as_secs_f32();
            fps_text = format!("{fps:.1}");
            frames_since_sample = 0;
            last_fps_sample = std::time::Instant::now();
        }
        overlay::draw_fps(&mut framebuffer, width as usize, &fps_text);

        video.present(&framebuffer);
    }
}

/// Headless smoke-run: advance `frames` frames with no window, used by CI
/// and tests to exercise the full machine without an SDL context.
pub fn run_headless(machine: &mut dyn Machine, frames: u32) {
    let (width, height) = machine.display_size();
    let mut framebuffer = vec![0u8; (width * height * 3) as usize];
    for _ in 0..frames {
        machine.run_frame();
        machine.render_frame(&mut framebuffer);
    }
}
