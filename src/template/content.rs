//! Embedded template bodies for every catalogue slot.
//!
//! Bodies ending in `_TPL` are MiniJinja templates interpolating the project
//! name (and generator metadata); everything else is copied verbatim. The
//! engine never inspects these strings.

pub const INDEX_HTML_TPL: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">
    <meta http-equiv="Content-Security-Policy" content="default-src 'self'; style-src 'self' 'unsafe-inline'; script-src 'self'; img-src 'self' data:; connect-src 'self';">
    <meta name="generator" content="{{ generator.name }} v{{ generator.version }}">
    <title>{{ name }}</title>

    <link rel="manifest" href="manifest.json">
    <link rel="apple-touch-icon" href="assets/icons/icon-192x192.png">
    <link rel="stylesheet" href="css/main.css">
    <link rel="stylesheet" href="css/ui.css">
</head>
<body>
    <canvas id="game-canvas"></canvas>

    <div id="ui-layer"></div>

    <div id="loading-layer">
        <div class="loader-spinner"></div>
        <div class="loading-text">Loading {{ name }}</div>
    </div>

    <div id="rotate-overlay">
        <p>Please rotate your device to landscape.</p>
    </div>

    <script type="module" src="js/main.js"></script>
    <script>
        if ('serviceWorker' in navigator) {
            window.addEventListener('load', () => {
                navigator.serviceWorker.register('service-worker.js')
                    .catch(err => console.warn('[SW] Registration failed:', err));
            });
        }
    </script>
</body>
</html>
"##;

pub const MANIFEST_JSON_TPL: &str = r##"{
  "name": "{{ name }}",
  "short_name": "{{ name }}",
  "start_url": ".",
  "display": "standalone",
  "orientation": "landscape",
  "background_color": "#111111",
  "theme_color": "#e96714",
  "icons": [
    {
      "src": "assets/icons/icon-192x192.png",
      "sizes": "192x192",
      "type": "image/png"
    }
  ]
}
"##;

pub const SERVICE_WORKER_JS_TPL: &str = r##"const CACHE_VERSION = 1;
const CACHE_NAME = '{{ name }}-v' + CACHE_VERSION;
const ASSETS = [
    '/',
    '/index.html',
    '/css/main.css',
    '/css/ui.css',
    '/js/main.js'
];

// Install - cache core assets
self.addEventListener('install', e => {
    e.waitUntil(
        caches.open(CACHE_NAME)
            .then(cache => cache.addAll(ASSETS))
            .then(() => self.skipWaiting())
    );
});

// Activate - drop caches from previous versions
self.addEventListener('activate', e => {
    e.waitUntil(
        caches.keys().then(names => Promise.all(
            names
                .filter(name => name.startsWith('{{ name }}-v') && name !== CACHE_NAME)
                .map(name => caches.delete(name))
        )).then(() => self.clients.claim())
    );
});

// Fetch - cache first, fall back to network, offline fallback to the shell
self.addEventListener('fetch', e => {
    e.respondWith(
        caches.match(e.request)
            .then(cached => {
                if (cached) return cached;
                return fetch(e.request).then(response => {
                    if (!response || response.status !== 200 || response.type === 'error') {
                        return response;
                    }
                    const copy = response.clone();
                    caches.open(CACHE_NAME).then(cache => cache.put(e.request, copy));
                    return response;
                });
            })
            .catch(() => caches.match('/index.html'))
    );
});
"##;

pub const README_MD_TPL: &str = r##"# {{ name }}

A Progressive Web App game framework scaffolded by {{ generator.name }}
v{{ generator.version }}. Zero dependencies, installable, offline-capable.

## Quick start

```sh
cd {{ name }}
python3 -m http.server 8000
# open http://localhost:8000
```

A service worker requires HTTP(S); opening index.html from the filesystem
will not register it.

## Layout

| Path            | Purpose                                        |
| --------------- | ---------------------------------------------- |
| `js/core/`      | Engine: loop, renderer, input, audio, assets   |
| `js/state/`     | Store, persistence, settings, scoreboard       |
| `js/scenes/`    | Scene manager plus menu and game scenes        |
| `js/ui/`        | DOM overlay management and error display       |
| `js/utils/`     | Math, DOM and error-handling helpers           |
| `assets/`       | Icons, audio, textures, models, shaders        |

## Where to start

- Game logic lives in `js/scenes/GameScene.js`.
- List critical assets in the `MANIFEST` array in `js/main.js` so they
  preload before the first frame.
- Replace `assets/icons/icon-192x192.png` (referenced by `manifest.json`)
  with a real 192x192 icon before shipping.
- Bump `CACHE_VERSION` in `service-worker.js` whenever shipped files change,
  otherwise returning visitors keep the old cache.
"##;

pub const GITIGNORE: &str = r##"node_modules/
.DS_Store
*.log
.vscode/
"##;

pub const MAIN_CSS: &str = r##"/* MAIN RESET & LAYOUT */
:root {
    --bg-color: #111111;
    --text-color: #ffffff;
    --accent-color: #e96714;
    --border-color: #444444;
    --glass-bg: rgba(20, 20, 20, 0.95);
    --font-main: system-ui, sans-serif;
}

* { box-sizing: border-box; margin: 0; padding: 0; user-select: none; -webkit-tap-highlight-color: transparent; }

body {
    background-color: var(--bg-color);
    color: var(--text-color);
    font-family: var(--font-main);
    width: 100vw;
    height: 100vh; /* Fallback for older browsers */
    height: 100dvh;
    overflow: hidden;
    position: fixed;
}

/* Layer 0: the game engine */
#game-canvas {
    position: absolute; top: 0; left: 0; width: 100%; height: 100%;
    z-index: 0;
    display: block;
}

/* Layer 1: the UI overlay */
#ui-layer {
    position: absolute; top: 0; left: 0; width: 100%; height: 100%;
    z-index: 10;
    pointer-events: none;
}
#ui-layer > * { pointer-events: auto; }

/* Layer 2: loading screen */
#loading-layer {
    position: fixed; top: 0; left: 0; width: 100%; height: 100%;
    background: var(--bg-color);
    z-index: 9999;
    display: flex; flex-direction: column; justify-content: center; align-items: center;
    transition: opacity 0.5s ease;
}
#loading-layer.fade-out { opacity: 0; pointer-events: none; }

/* Orientation enforcer */
#rotate-overlay {
    display: none;
    position: fixed; top: 0; left: 0; width: 100%; height: 100%;
    background: #000; z-index: 9998;
    flex-direction: column; justify-content: center; align-items: center;
    text-align: center;
}

@media screen and (orientation: portrait) and (max-width: 768px) {
    /* Uncomment to force landscape */
    /* #rotate-overlay { display: flex; } */
}
"##;

pub const UI_CSS: &str = r##"/* UI COMPONENT STYLES */

.hidden { display: none !important; }

.loader-spinner {
    width: 50px; height: 50px;
    border: 3px solid rgba(255,255,255,0.1);
    border-radius: 50%;
    border-top-color: var(--accent-color);
    animation: spin 1s ease-in-out infinite;
    margin-bottom: 20px;
}
@keyframes spin { to { transform: rotate(360deg); } }

.loading-text {
    font-size: 0.8rem; letter-spacing: 2px; text-transform: uppercase; color: #666;
}

.glass-panel {
    background: var(--glass-bg);
    border: 1px solid var(--border-color);
    backdrop-filter: blur(10px);
    border-radius: 4px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.5);
    text-align: center;
}

.menu-card {
    position: absolute;
    top: 50%; left: 50%;
    transform: translate(-50%, -50%);
    padding: 20px;
    width: 350px;
}

.menu-title {
    font-size: 2rem;
    text-transform: uppercase;
    letter-spacing: 4px;
    margin-bottom: 20px;
    border-bottom: 1px solid var(--accent-color);
    padding-bottom: 15px;
}

.menu-button {
    display: block;
    width: 100%;
    margin-bottom: 10px;
    padding: 12px;
    background: transparent;
    border: 1px solid var(--border-color);
    color: var(--text-color);
    font-family: inherit;
    text-transform: uppercase;
    letter-spacing: 2px;
    cursor: pointer;
}
.menu-button:hover { border-color: var(--accent-color); color: var(--accent-color); }

.error-toast {
    position: fixed;
    bottom: 20px; left: 50%;
    transform: translateX(-50%);
    padding: 12px 24px;
    background: #3a1111;
    border: 1px solid #a33;
    color: #faa;
    font-size: 0.85rem;
    z-index: 10000;
}
"##;

pub const MAIN_JS: &str = r##"import { Renderer } from './core/Renderer.js';
import { GameLoop } from './core/GameLoop.js';
import { AssetLoader } from './core/AssetLoader.js';
import { SceneManager } from './scenes/SceneManager.js';
import { UIManager } from './ui/UIManager.js';
import { ErrorHandler } from './utils/ErrorHandler.js';

ErrorHandler.init();

// Critical assets to preload before the first frame.
const MANIFEST = [
    // { type: 'image', src: 'assets/textures/player.png', key: 'player' }
];

async function initApp() {
    try {
        Renderer.init('game-canvas');
        UIManager.init();
        await AssetLoader.load(MANIFEST);

        SceneManager.init();

        const loader = document.getElementById('loading-layer');
        loader.classList.add('fade-out');
        setTimeout(() => loader.remove(), 500);

        GameLoop.start((deltaTime) => {
            SceneManager.update(deltaTime);
            SceneManager.render();
        });
    } catch (e) {
        console.error('Boot failed:', e);
        ErrorHandler.report(e);
    }
}

window.addEventListener('DOMContentLoaded', initApp);
"##;

pub const GAME_LOOP_JS: &str = r##"// Fixed-timestep game loop driven by requestAnimationFrame.
export const GameLoop = {
    running: false,
    lastTime: 0,
    maxDelta: 1 / 30,

    start(tick) {
        this.running = true;
        this.lastTime = performance.now();
        const frame = (now) => {
            if (!this.running) return;
            let delta = (now - this.lastTime) / 1000;
            this.lastTime = now;
            // Clamp after tab-switch stalls so physics never explodes.
            if (delta > this.maxDelta) delta = this.maxDelta;
            tick(delta);
            requestAnimationFrame(frame);
        };
        requestAnimationFrame(frame);
    },

    stop() {
        this.running = false;
    }
};
"##;

pub const RENDERER_JS: &str = r##"// Canvas renderer with high-DPI scaling.
export const Renderer = {
    canvas: null,
    ctx: null,

    init(canvasId) {
        this.canvas = document.getElementById(canvasId);
        if (!this.canvas) throw new Error(`Canvas '${canvasId}' not found`);
        this.ctx = this.canvas.getContext('2d');
        this.resize();
        window.addEventListener('resize', () => this.resize());
    },

    resize() {
        const dpr = window.devicePixelRatio || 1;
        this.canvas.width = window.innerWidth * dpr;
        this.canvas.height = window.innerHeight * dpr;
        this.ctx.setTransform(dpr, 0, 0, dpr, 0, 0);
    },

    clear(color = '#111111') {
        this.ctx.fillStyle = color;
        this.ctx.fillRect(0, 0, window.innerWidth, window.innerHeight);
    }
};
"##;

pub const INPUT_MANAGER_JS: &str = r##"// Unified keyboard and pointer state.
export const InputManager = {
    keys: new Set(),
    pointer: { x: 0, y: 0, down: false },

    init() {
        window.addEventListener('keydown', e => this.keys.add(e.code));
        window.addEventListener('keyup', e => this.keys.delete(e.code));
        window.addEventListener('pointerdown', e => this.onPointer(e, true));
        window.addEventListener('pointerup', e => this.onPointer(e, false));
        window.addEventListener('pointermove', e => this.onPointer(e, this.pointer.down));
    },

    onPointer(e, down) {
        this.pointer.x = e.clientX;
        this.pointer.y = e.clientY;
        this.pointer.down = down;
    },

    isDown(code) {
        return this.keys.has(code);
    }
};
"##;

pub const AUDIO_MANAGER_JS: &str = r##"// Web Audio wrapper; context must be unlocked by a user gesture.
export const AudioManager = {
    ctx: null,
    muted: false,

    unlock() {
        if (!this.ctx) {
            this.ctx = new (window.AudioContext || window.webkitAudioContext)();
        }
        if (this.ctx.state === 'suspended') this.ctx.resume();
    },

    play(buffer, { volume = 1.0, loop = false } = {}) {
        if (this.muted || !this.ctx || !buffer) return null;
        const source = this.ctx.createBufferSource();
        const gain = this.ctx.createGain();
        source.buffer = buffer;
        source.loop = loop;
        gain.gain.value = volume;
        source.connect(gain).connect(this.ctx.destination);
        source.start();
        return source;
    }
};
"##;

pub const ASSET_LOADER_JS: &str = r##"// Preloads manifest assets; failures reject so boot can surface them.
export const AssetLoader = {
    cache: new Map(),

    async load(manifest) {
        await Promise.all(manifest.map(entry => this.loadOne(entry)));
    },

    loadOne({ type, src, key }) {
        if (!key || !src) return Promise.reject(new Error('Manifest entry needs key and src'));
        switch (type) {
            case 'image':
                return new Promise((resolve, reject) => {
                    const img = new Image();
                    img.onload = () => { this.cache.set(key, img); resolve(img); };
                    img.onerror = () => reject(new Error(`Failed to load ${src}`));
                    img.src = src;
                });
            case 'json':
                return fetch(src).then(r => r.json()).then(data => {
                    this.cache.set(key, data);
                    return data;
                });
            default:
                return Promise.reject(new Error(`Unknown asset type '${type}'`));
        }
    },

    get(key) {
        return this.cache.get(key);
    }
};
"##;

pub const STORE_JS: &str = r##"// Minimal observable state container.
export const Store = {
    state: {},
    listeners: new Set(),

    set(patch) {
        Object.assign(this.state, patch);
        this.listeners.forEach(fn => fn(this.state));
    },

    subscribe(fn) {
        this.listeners.add(fn);
        return () => this.listeners.delete(fn);
    }
};
"##;

pub const SAVE_SYSTEM_JS: &str = r##"// localStorage persistence; storage may be unavailable in private mode.
export const SaveSystem = {
    key: 'save-data',

    save(data) {
        try {
            localStorage.setItem(this.key, JSON.stringify(data));
            return true;
        } catch (e) {
            console.warn('[Save] Write failed:', e);
            return false;
        }
    },

    load() {
        try {
            const raw = localStorage.getItem(this.key);
            return raw ? JSON.parse(raw) : null;
        } catch (e) {
            console.warn('[Save] Read failed:', e);
            return null;
        }
    },

    clear() {
        localStorage.removeItem(this.key);
    }
};
"##;

pub const SETTINGS_JS: &str = r##"import { SaveSystem } from './SaveSystem.js';

const DEFAULTS = { sound: true, music: true, vibration: false };

export const Settings = {
    values: { ...DEFAULTS },

    init() {
        const stored = SaveSystem.load();
        if (stored && stored.settings) {
            this.values = { ...DEFAULTS, ...stored.settings };
        }
    },

    set(key, value) {
        this.values[key] = value;
        const data = SaveSystem.load() || {};
        data.settings = this.values;
        SaveSystem.save(data);
    },

    get(key) {
        return this.values[key];
    }
};
"##;

pub const SCOREBOARD_JS: &str = r##"import { SaveSystem } from './SaveSystem.js';

const MAX_ENTRIES = 10;

export const Scoreboard = {
    scores: [],

    init() {
        const data = SaveSystem.load();
        this.scores = (data && data.scores) || [];
    },

    submit(score) {
        this.scores.push({ score, at: Date.now() });
        this.scores.sort((a, b) => b.score - a.score);
        this.scores = this.scores.slice(0, MAX_ENTRIES);
        const data = SaveSystem.load() || {};
        data.scores = this.scores;
        SaveSystem.save(data);
    },

    best() {
        return this.scores.length ? this.scores[0].score : 0;
    }
};
"##;

pub const SCENE_MANAGER_JS: &str = r##"import { MenuScene } from './MenuScene.js';
import { GameScene } from './GameScene.js';

// Owns the active scene; scenes implement enter/exit/update/render.
export const SceneManager = {
    scenes: { menu: MenuScene, game: GameScene },
    active: null,

    init() {
        this.switchTo('menu');
    },

    switchTo(name) {
        const next = this.scenes[name];
        if (!next) throw new Error(`Unknown scene '${name}'`);
        if (this.active && this.active.exit) this.active.exit();
        this.active = next;
        if (this.active.enter) this.active.enter();
    },

    update(deltaTime) {
        if (this.active) this.active.update(deltaTime);
    },

    render() {
        if (this.active) this.active.render();
    }
};
"##;

pub const MENU_SCENE_JS: &str = r##"import { Renderer } from '../core/Renderer.js';
import { UIManager } from '../ui/UIManager.js';
import { SceneManager } from './SceneManager.js';

export const MenuScene = {
    enter() {
        UIManager.showMenu({
            title: document.title,
            onStart: () => SceneManager.switchTo('game')
        });
    },

    exit() {
        UIManager.hideMenu();
    },

    update(_deltaTime) {},

    render() {
        Renderer.clear();
    }
};
"##;

pub const GAME_SCENE_JS: &str = r##"import { Renderer } from '../core/Renderer.js';
import { InputManager } from '../core/InputManager.js';

// Your game goes here.
export const GameScene = {
    elapsed: 0,

    enter() {
        this.elapsed = 0;
        InputManager.init();
    },

    update(deltaTime) {
        this.elapsed += deltaTime;
    },

    render() {
        Renderer.clear();
        const ctx = Renderer.ctx;
        ctx.fillStyle = '#e96714';
        ctx.font = '16px system-ui';
        ctx.fillText(`Running for ${this.elapsed.toFixed(1)}s`, 20, 40);
    }
};
"##;

pub const UI_MANAGER_JS: &str = r##"import { createElement } from '../utils/DOMUtils.js';

// Manages the DOM overlay above the canvas.
export const UIManager = {
    layer: null,
    menu: null,

    init() {
        this.layer = document.getElementById('ui-layer');
        if (!this.layer) throw new Error('UI layer missing from index.html');
    },

    showMenu({ title, onStart }) {
        this.menu = createElement('div', { className: 'glass-panel menu-card' });
        const heading = createElement('h1', { className: 'menu-title', textContent: title });
        const start = createElement('button', { className: 'menu-button', textContent: 'Start' });
        start.addEventListener('click', onStart);
        this.menu.append(heading, start);
        this.layer.append(this.menu);
    },

    hideMenu() {
        if (this.menu) {
            this.menu.remove();
            this.menu = null;
        }
    }
};
"##;

pub const ERROR_DISPLAY_JS: &str = r##"import { createElement } from '../utils/DOMUtils.js';

// Non-blocking error toast for surfaced runtime failures.
export const ErrorDisplay = {
    show(message, timeoutMs = 5000) {
        const toast = createElement('div', {
            className: 'error-toast',
            textContent: message
        });
        document.body.append(toast);
        setTimeout(() => toast.remove(), timeoutMs);
    }
};
"##;

pub const MATH_UTILS_JS: &str = r##"export const MathUtils = {
    clamp(value, min, max) {
        return Math.min(Math.max(value, min), max);
    },

    lerp(a, b, t) {
        return a + (b - a) * t;
    },

    randomRange(min, max) {
        return min + Math.random() * (max - min);
    },

    distance(x1, y1, x2, y2) {
        const dx = x2 - x1;
        const dy = y2 - y1;
        return Math.hypot(dx, dy);
    }
};
"##;

pub const DOM_UTILS_JS: &str = r##"export function createElement(tag, props = {}) {
    const el = document.createElement(tag);
    Object.assign(el, props);
    return el;
}

export function qs(selector, root = document) {
    return root.querySelector(selector);
}

export function qsa(selector, root = document) {
    return Array.from(root.querySelectorAll(selector));
}
"##;

pub const ERROR_HANDLER_JS: &str = r##"import { ErrorDisplay } from '../ui/ErrorDisplay.js';

// Global trap for uncaught errors and unhandled rejections.
export const ErrorHandler = {
    init() {
        window.addEventListener('error', e => this.report(e.error || e.message));
        window.addEventListener('unhandledrejection', e => this.report(e.reason));
    },

    report(err) {
        const message = err && err.message ? err.message : String(err);
        console.error('[ErrorHandler]', err);
        ErrorDisplay.show(message);
    }
};
"##;

pub const ASSET_DIR_GITKEEP: &str =
    "# Keeps this asset directory in version control until real assets land.\n";
