//! Embedded file content written into builds that lack it.

/// Stock SCORM 1.2 bridge script.
///
/// The browser-side twin of `scormkit-runtime`: same frame-walk discovery
/// bound, same session rules, same message tokens.
pub const BRIDGE_JS: &str = r#"// scormkit SCORM 1.2 bridge
var SCORM = (function () {
  var apiHandle = null;
  var initialized = false;
  var contentFrame = null;

  function findAPI(win) {
    var maxHops = 7, hops = 0;
    while ((win.API == null) && (win.parent != null) && (win.parent != win)) {
      hops++;
      if (hops > maxHops) {
        console.log("SCORM API search stopped: too deeply nested");
        return null;
      }
      win = win.parent;
    }
    return win.API;
  }

  function getAPI() {
    if (apiHandle) return apiHandle;
    var api = findAPI(window);
    if (!api && window.opener) api = findAPI(window.opener);
    if (!api) console.log("Unable to find SCORM API");
    apiHandle = api;
    return apiHandle;
  }

  function initialize() {
    if (initialized) return "true";
    var api = getAPI();
    if (api && typeof api.LMSInitialize === "function") {
      var result = api.LMSInitialize("");
      initialized = result.toString() === "true";
      return result.toString();
    }
    return "false";
  }

  function finish() {
    var api = getAPI();
    if (api && typeof api.LMSFinish === "function") {
      var result = api.LMSFinish("");
      initialized = false;
      return result.toString();
    }
    return "false";
  }

  function setValue(field, value) {
    var api = getAPI();
    if (api && typeof api.LMSSetValue === "function") {
      if (!initialized) {
        console.log("SCORM write rejected before initialization:", field);
        return "false";
      }
      var result = api.LMSSetValue(field, value);
      if (typeof api.LMSCommit === "function") api.LMSCommit("");
      return result.toString();
    }
    return "false";
  }

  function getValue(field) {
    var api = getAPI();
    if (api && typeof api.LMSGetValue === "function") {
      var value = api.LMSGetValue(field);
      return value != null ? value.toString() : "";
    }
    return "";
  }

  function handleMessage(event) {
    var data = event.data;

    if (data && typeof data === "object" && data.type === "unityReady") {
      var frame = document.getElementById("gameFrame");
      if (frame && frame.contentWindow) contentFrame = frame.contentWindow;
      return;
    }

    if (data === "initSCORM") {
      initialize();
    } else if (typeof data === "string" && data.indexOf("setScore:") === 0) {
      var score = parseInt(data.split(":")[1]);
      if (!isNaN(score)) {
        setValue("cmi.core.score.min", "0");
        setValue("cmi.core.score.max", "100");
        setValue("cmi.core.score.raw", score);
        setValue("cmi.core.lesson_status", (score >= 50) ? "passed" : "failed");
      }
    } else if (typeof data === "string" && data.indexOf("setStatus:") === 0) {
      setValue("cmi.core.lesson_status", data.split(":")[1]);
    } else if (typeof data === "string" && data.indexOf("setLocation:") === 0) {
      setValue("cmi.core.lesson_location", data.split(":")[1]);
    } else if (data === "setStatusCompleted") {
      setValue("cmi.core.lesson_status", "completed");
    } else if (data === "markFinished") {
      finish();
    } else if (data === "requestStudentInfo") {
      var id = getValue("cmi.core.student_id");
      var name = getValue("cmi.core.student_name");
      if (contentFrame) {
        contentFrame.postMessage({ type: "studentInfo", id: id, name: name }, "*");
      } else {
        console.log("Content frame not yet available for the student info reply");
      }
    }
  }

  window.addEventListener("message", handleMessage);

  return { initialize: initialize, finish: finish, setValue: setValue, getValue: getValue };
})();

window.addEventListener("load", function () {
  SCORM.initialize();
});
"#;
