//! JNI entry points for `com.tchvu3.capacitorvoicerecorder.NativeAudioCapture`.
//!
//! The plugin talks to one process-wide [`Recorder`]. The slot mutex is only
//! taken on the caller's thread; the audio callback touches the session buffer
//! alone, so draining never waits on the slot.

use std::ffi::c_void;
use std::ptr;
use std::sync::Arc;

use jni::objects::JClass;
use jni::sys::{
    jboolean, jbyteArray, jint, jshortArray, jsize, jstring, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6,
};
use jni::{JNIEnv, JavaVM};
use parking_lot::Mutex;

use voice_capture_core::{CaptureError, Recorder};

use crate::logcat_delegate::LogcatDelegate;
use crate::oboe_input::OboeProvider;

const LOG_TAG: &str = "NativeAudioCapture";

static RECORDER: Mutex<Option<Recorder<OboeProvider>>> = parking_lot::const_mutex(None);

fn with_recorder<R>(f: impl FnOnce(&mut Recorder<OboeProvider>) -> R) -> R {
    let mut slot = RECORDER.lock();
    let recorder = slot.get_or_insert_with(|| {
        let mut recorder = Recorder::new(OboeProvider::new());
        recorder.set_delegate(Arc::new(LogcatDelegate));
        recorder
    });
    f(recorder)
}

fn to_jboolean(op: &str, result: Result<(), CaptureError>) -> jboolean {
    match result {
        Ok(()) => JNI_TRUE,
        Err(e) => {
            log::debug!("{} failed: {}", op, e);
            JNI_FALSE
        }
    }
}

fn short_array(env: &mut JNIEnv, samples: &[i16]) -> jni::errors::Result<jshortArray> {
    let len = samples.len().min(jsize::MAX as usize);
    let array = env.new_short_array(len as jsize)?;
    env.set_short_array_region(&array, 0, &samples[..len])?;
    Ok(array.into_raw())
}

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(LOG_TAG),
    );
    log::info!("voice-capture bridge loaded");
    JNI_VERSION_1_6
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_startRecording(
    _env: JNIEnv,
    _class: JClass,
    device_id: jint,
) -> jboolean {
    to_jboolean("startRecording", with_recorder(|r| r.start(device_id)))
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_getRecordedData(
    mut env: JNIEnv,
    _class: JClass,
) -> jshortArray {
    let samples = with_recorder(|r| r.drain());
    match short_array(&mut env, &samples) {
        Ok(array) => array,
        Err(e) => {
            log::error!("Failed to hand {} samples to Java: {}", samples.len(), e);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_getRecordedWav(
    mut env: JNIEnv,
    _class: JClass,
) -> jbyteArray {
    let chunk = with_recorder(|r| r.drain_chunk());
    match env.byte_array_from_slice(&chunk.to_wav()) {
        Ok(array) => array.into_raw(),
        Err(e) => {
            log::error!("Failed to hand {} ms of audio to Java: {}", chunk.duration_ms(), e);
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_stopRecording(
    _env: JNIEnv,
    _class: JClass,
) {
    with_recorder(|r| r.stop());
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_pauseRecording(
    _env: JNIEnv,
    _class: JClass,
) -> jboolean {
    to_jboolean("pauseRecording", with_recorder(|r| r.pause()))
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_resumeRecording(
    _env: JNIEnv,
    _class: JClass,
) -> jboolean {
    to_jboolean("resumeRecording", with_recorder(|r| r.resume()))
}

#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_getCurrentStatus(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    let status = with_recorder(|r| r.status());
    match env.new_string(status.as_str()) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            log::error!("Failed to create status string: {}", e);
            ptr::null_mut()
        }
    }
}

/// Returns the diagnostics of the open session as JSON, or null when closed.
#[no_mangle]
pub extern "system" fn Java_com_tchvu3_capacitorvoicerecorder_NativeAudioCapture_getDiagnostics(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    let Some(diagnostics) = with_recorder(|r| r.diagnostics()) else {
        return ptr::null_mut();
    };
    let json = match diagnostics.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize diagnostics: {}", e);
            return ptr::null_mut();
        }
    };
    match env.new_string(json) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            log::error!("Failed to create diagnostics string: {}", e);
            ptr::null_mut()
        }
    }
}
